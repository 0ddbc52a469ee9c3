//! Terminal and JSON renderings of a calculation.

use anyhow::Result;
use mm2_core::{Calculation, Formatted};

/// Render the derivation as plain text.
///
/// ```text
/// M/M/2 queue: interarrival time 2 min, service time 3 min
///
/// Step 1: Compute λ (arrival rate)
///   λ = 1 / (interarrival time)
///   λ = 1 / 2
///   λ = 0.5
/// ...
/// Summary
///   λ  = 0.5 customers/minute
/// ```
pub fn render_text(calc: &Calculation) -> String {
    let mut out = format!(
        "M/M/2 queue: interarrival time {} min, service time {} min\n",
        Formatted::exact(calc.input.interarrival_min),
        Formatted::exact(calc.input.service_min),
    );

    for step in &calc.steps {
        out.push_str(&format!("\n{}\n", step.title));
        for line in &step.substitution_lines {
            out.push_str(&format!("  {line}\n"));
        }
    }

    out.push_str("\nSummary\n");
    for step in &calc.steps {
        let value = Formatted::display(step.result);
        let symbol = step.kind.symbol();
        match step.kind.unit() {
            Some(unit) => out.push_str(&format!("  {symbol:<2} = {value} {unit}\n")),
            None => out.push_str(&format!("  {symbol:<2} = {value}\n")),
        }
    }
    out
}

/// Render the whole calculation as pretty-printed JSON.
pub fn render_json(calc: &Calculation) -> Result<String> {
    Ok(serde_json::to_string_pretty(calc)?)
}
