//! Plain-text views of engine state.

use std::fmt::Write;

use crate::engine::EngineState;

/// `Accesses: n | Faults: n | Hits: n | Hit Rate: x.y%`
pub fn counters(state: &EngineState) -> String {
    format!(
        "Accesses: {} | Faults: {} | Hits: {} | Hit Rate: {:.1}%",
        state.stats.accesses,
        state.stats.faults,
        state.stats.hits,
        state.hit_rate() * 100.0
    )
}

/// One line per frame slot. Slot 1 holds the next eviction victim.
pub fn memory(state: &EngineState) -> String {
    let mut out = format!("Main memory (capacity: {})\n", state.capacity);
    for slot in 0..state.capacity {
        let label = match state.frames.get(slot) {
            Some(page) if slot == 0 => format!("{:<8} oldest", page.as_str()),
            Some(page) => format!("{:<8} position {}", page.as_str(), slot + 1),
            None => "-        empty".to_string(),
        };
        let _ = writeln!(out, "  [slot {}] {}", slot + 1, label);
    }
    out
}

/// The access history, with the most recent access bracketed.
pub fn history(state: &EngineState) -> String {
    if state.history.is_empty() {
        return "Access history: (none)".to_string();
    }
    let last = state.history.len() - 1;
    let entries: Vec<String> = state
        .history
        .iter()
        .enumerate()
        .map(|(i, page)| {
            if i == last {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();
    format!("Access history: {}", entries.join(" "))
}

/// Everything above plus the last outcome, as shown after each step.
pub fn full(state: &EngineState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", counters(state));
    if let Some(last) = &state.last {
        let _ = writeln!(out, "> {}", last);
    }
    out.push_str(&memory(state));
    let _ = writeln!(out, "{}", history(state));
    out
}
