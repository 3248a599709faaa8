use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fifosim::common::config::{DEMO_SEQUENCE, SAMPLE_PAGES};
use fifosim::script::apply;
use fifosim::{render, EngineConfig, EvictionEngine, Script, Step, DEFAULT_CAPACITY};

#[derive(Parser, Debug)]
#[command(about = String::from("FIFO page replacement simulator"))]
struct Args {
    /// Initial number of frames (ignored when --config is given)
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// JSON engine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(short, long)]
    json: bool,

    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Access the given pages in order
    Run { pages: Vec<String> },
    /// Run an access script file
    Script { path: PathBuf },
    /// Run the P1 P2 P3 P4 P5 P1 P2 P6 demonstration sequence
    Demo,
    /// Read script lines from stdin
    Repl,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Couldn't open the config file at path {}: {e}", path.display()))?;
            EngineConfig::from_reader(BufReader::new(file))
                .map_err(|e| format!("Couldn't load the config file: {e}"))?
        }
        None => EngineConfig::with_capacity(args.capacity),
    };
    let mut engine = EvictionEngine::with_config(config).map_err(|e| e.to_string())?;

    match &args.command {
        Mode::Run { pages } => {
            let script = Script::from_accesses(pages.as_slice()).map_err(|e| e.to_string())?;
            run_script(&mut engine, &script, args.json)?;
        }
        Mode::Script { path } => {
            let script = Script::from_file(path)
                .map_err(|e| format!("Couldn't load the script at path {}: {e}", path.display()))?;
            run_script(&mut engine, &script, args.json)?;
        }
        Mode::Demo => {
            let script = Script::from_accesses(&DEMO_SEQUENCE[..]).map_err(|e| e.to_string())?;
            run_script(&mut engine, &script, args.json)?;
        }
        Mode::Repl => repl(&mut engine, args.json)?,
    }
    Ok(())
}

fn run_script(engine: &mut EvictionEngine, script: &Script, json: bool) -> Result<(), String> {
    let steps = script.run(engine).map_err(|e| e.to_string())?;
    if json {
        let state = serde_json::to_string_pretty(&engine.state())
            .map_err(|e| format!("Couldn't serialise the output {e}"))?;
        println!("{state}");
    } else {
        for step in &steps {
            print_step(step);
        }
        print!("{}", render::full(&engine.state()));
    }
    Ok(())
}

fn repl(engine: &mut EvictionEngine, json: bool) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    eprintln!(
        "Enter pages (try {}), 'resize <n>' or 'reset'. Capacity: {} (max {})",
        SAMPLE_PAGES.join(" "),
        engine.capacity(),
        engine.max_capacity()
    );
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Couldn't read stdin: {e}"))?;
        // Engine errors are reported and the session continues
        match repl_line(engine, &line, json) {
            Ok(output) => print!("{output}"),
            Err(e) => eprintln!("error: {e}"),
        }
        stdout.flush().map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Apply one REPL line and return what to print.
///
/// Blank and comment-only lines produce no output in either mode.
fn repl_line(engine: &mut EvictionEngine, line: &str, json: bool) -> fifosim::Result<String> {
    let script = Script::parse(line)?;
    let steps = script
        .commands()
        .iter()
        .map(|command| apply(engine, command))
        .collect::<fifosim::Result<Vec<Step>>>()?;
    if steps.is_empty() {
        return Ok(String::new());
    }

    let mut out = String::new();
    for step in &steps {
        out.push_str(&format_step(step));
    }
    if json {
        out.push_str(&serde_json::to_string(&engine.state())?);
        out.push('\n');
    } else {
        out.push_str(&render::full(&engine.state()));
    }
    Ok(out)
}

fn print_step(step: &Step) {
    print!("{}", format_step(step));
}

fn format_step(step: &Step) -> String {
    let mut out = String::new();
    if let Some(outcome) = &step.outcome {
        out.push_str(&format!("{outcome}\n"));
    }
    if !step.dropped.is_empty() {
        let dropped: Vec<&str> = step.dropped.iter().map(|p| p.as_str()).collect();
        out.push_str(&format!("Resize dropped {}\n", dropped.join(", ")));
    }
    out
}
