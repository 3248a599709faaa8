//! Access scripts: a line-oriented way to drive an engine.
//!
//! # Format
//! ```text
//! # comments and blank lines are ignored
//! capacity 3        # or: resize 3
//! P1 P2 P3          # bare identifiers are accessed left to right
//! access P4
//! reset
//! P#1               # '#' only starts a comment at the start of a token
//! ```
//!
//! `resize`, `capacity`, `reset` and `access` are keywords when they start
//! a line. To access a page with one of those names, use the `access` form:
//! `access reset`. A bare `reset A` is an error.

use std::fs;
use std::path::Path;

use crate::common::{Error, PageId, Result};
use crate::engine::{EvictionEngine, Outcome};

/// One request to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Access(PageId),
    Resize(usize),
    Reset,
}

/// A command together with what it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub command: Command,

    /// Set for accesses.
    pub outcome: Option<Outcome>,

    /// Pages a resize pushed out, oldest first.
    pub dropped: Vec<PageId>,
}

/// A parsed sequence of commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    /// Parse script text.
    ///
    /// # Errors
    /// `Error::Script` with the 1-based line number of the first bad line.
    pub fn parse(text: &str) -> Result<Self> {
        let mut commands = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            parse_line(raw, idx + 1, &mut commands)?;
        }
        Ok(Self { commands })
    }

    /// Read and parse a script file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// A script that accesses `labels` in order.
    pub fn from_accesses<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let commands = labels
            .iter()
            .map(|s| PageId::new(s.as_ref()).map(Command::Access))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { commands })
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Apply every command in order, stopping at the first engine error.
    pub fn run(&self, engine: &mut EvictionEngine) -> Result<Vec<Step>> {
        self.commands
            .iter()
            .map(|command| apply(engine, command))
            .collect()
    }
}

/// Apply a single command.
pub fn apply(engine: &mut EvictionEngine, command: &Command) -> Result<Step> {
    let (outcome, dropped) = match command {
        Command::Access(page_id) => (Some(engine.access_page(page_id.clone())), Vec::new()),
        Command::Resize(capacity) => (None, engine.resize(*capacity)?),
        Command::Reset => {
            engine.reset();
            (None, Vec::new())
        }
    };
    Ok(Step {
        command: command.clone(),
        outcome,
        dropped,
    })
}

fn parse_line(raw: &str, line: usize, out: &mut Vec<Command>) -> Result<()> {
    // A comment starts at a token beginning with '#'; '#' inside a token is
    // part of the identifier.
    let mut tokens = raw
        .split_whitespace()
        .take_while(|token| !token.starts_with('#'));
    let Some(first) = tokens.next() else {
        return Ok(());
    };

    let script_err = |message: String| Error::Script { line, message };

    match first {
        "resize" | "capacity" => {
            let value = tokens
                .next()
                .ok_or_else(|| script_err(format!("'{}' needs a capacity", first)))?;
            let capacity = value
                .parse::<usize>()
                .map_err(|_| script_err(format!("invalid capacity '{}'", value)))?;
            if let Some(extra) = tokens.next() {
                return Err(script_err(format!("unexpected '{}' after capacity", extra)));
            }
            out.push(Command::Resize(capacity));
        }
        "reset" => {
            if let Some(extra) = tokens.next() {
                return Err(script_err(format!("unexpected '{}' after reset", extra)));
            }
            out.push(Command::Reset);
        }
        "access" => {
            let mut any = false;
            for token in tokens {
                out.push(Command::Access(PageId::new(token)?));
                any = true;
            }
            if !any {
                return Err(script_err("'access' needs a page identifier".to_string()));
            }
        }
        _ => {
            for token in std::iter::once(first).chain(tokens) {
                out.push(Command::Access(PageId::new(token)?));
            }
        }
    }
    Ok(())
}
