//! Format exploration reports for human consumption.

use crate::explorer::{ExplorationReport, SearchOutcome};
use crate::path::Witness;

/// Format an exploration report for human consumption.
pub fn format_report(report: &ExplorationReport) -> String {
    let mut output = String::new();

    output.push_str("═══════════════════════════════════════════════════════════════════════\n");
    output.push_str(&format!("  Register Search Report: {}\n", report.puzzle));
    output.push_str("═══════════════════════════════════════════════════════════════════════\n\n");

    output.push_str(&format!("Registers:              {}\n", report.register_names.join(", ")));
    output.push_str(&format!("Target:                 {}\n", report.target));
    let result = match &report.outcome {
        SearchOutcome::Found(witness) => format!("found in {} actions", witness.action_count()),
        SearchOutcome::Exhausted => "unreachable (space exhausted)".to_string(),
        SearchOutcome::Truncated => "unknown (state budget reached)".to_string(),
    };
    output.push_str(&format!("Result:                 {}\n", result));
    output.push('\n');

    let stats = &report.stats;
    output.push_str("─── Search Statistics ─────────────────────────────────────────────────\n");
    output.push_str(&format!("States discovered:      {}\n", stats.states_discovered));
    output.push_str(&format!("States expanded:        {}\n", stats.states_expanded));
    output.push_str(&format!(
        "Actions applied:        {} / {} tried\n",
        stats.actions_applied, stats.actions_tried
    ));
    output.push_str(&format!("Duplicates skipped:     {}\n", stats.duplicates_skipped));
    output.push_str(&format!("Max depth:              {}\n", stats.max_depth));
    output.push_str(&format!("Frontier peak:          {}\n", stats.frontier_peak));
    if stats.collisions > 0 {
        output.push_str(&format!("Hash collisions:        {}\n", stats.collisions));
    }
    output.push('\n');

    match &report.outcome {
        SearchOutcome::Found(witness) => {
            output.push_str(
                "─── Witness ───────────────────────────────────────────────────────────\n",
            );
            output.push_str(&format_witness(witness, &report.register_names));
            output.push('\n');
        }
        _ => {
            output.push_str(
                "─── No Witness ────────────────────────────────────────────────────────\n",
            );
            output.push_str("No reachable state satisfies the target.\n\n");
        }
    }

    output.push_str("═══════════════════════════════════════════════════════════════════════\n");

    output
}

/// Format a witness as one numbered line per state.
///
/// ```text
///   0. (initial)       small=0 big=0
///   1. FillBig         small=0 big=5
/// ```
pub fn format_witness(witness: &Witness, register_names: &[String]) -> String {
    let mut output = String::new();

    for (i, step) in witness.steps.iter().enumerate() {
        let action = step.action.as_deref().unwrap_or("(initial)");
        let registers: Vec<String> = step
            .state
            .as_slice()
            .iter()
            .enumerate()
            .map(|(index, value)| match register_names.get(index) {
                Some(name) => format!("{}={}", name, value),
                None => format!("r{}={}", index, value),
            })
            .collect();
        output.push_str(&format!(
            "  {:>2}. {:<16} {}\n",
            i,
            action,
            registers.join(" ")
        ));
    }

    output
}
