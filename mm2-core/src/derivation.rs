//! Assembly of the worked derivation.
//!
//! Each step shows its formula, the formula with earlier values
//! substituted, and the result. Substituted values are the rounded
//! numbers a reader saw in the earlier steps, while each step's stored
//! `result` stays at full precision:
//!
//! ```text
//! Step 4: Compute W (time in system)
//!   W = 1 / (μ - λ/2)
//!   W = 1 / (0.3333 - 0.5/2)
//!   W = 1 / (0.3333 - 0.25)
//!   W = 1 / 0.0833
//!   W = 12
//! ```

use crate::calculator::Metrics;
use crate::{CalculationInput, DerivationStep, Formatted, StepKind};

/// Build the five derivation steps, in [`StepKind::ALL`] order.
pub(crate) fn build_steps(input: &CalculationInput, m: &Metrics) -> Vec<DerivationStep> {
    StepKind::ALL
        .iter()
        .map(|&kind| build_step(kind, input, m))
        .collect()
}

fn build_step(kind: StepKind, input: &CalculationInput, m: &Metrics) -> DerivationStep {
    let shown = Formatted::display;
    let symbolic = formula(kind);

    let (result, substituted): (f64, Vec<String>) = match kind {
        StepKind::ArrivalRate => (
            m.lambda,
            vec![
                format!("λ = 1 / {}", Formatted::exact(input.interarrival_min)),
                format!("λ = {}", shown(m.lambda)),
            ],
        ),
        StepKind::ServiceRate => (
            m.mu,
            vec![
                format!("μ = 1 / {}", Formatted::exact(input.service_min)),
                format!("μ = {}", shown(m.mu)),
            ],
        ),
        StepKind::Utilization => (
            m.rho,
            vec![
                format!("ρ = {} / (2 × {})", shown(m.lambda), shown(m.mu)),
                format!("ρ = {} / {}", shown(m.lambda), shown(m.two_mu)),
                format!("ρ = {}", shown(m.rho)),
            ],
        ),
        StepKind::TimeInSystem => (
            m.w,
            vec![
                format!("W = 1 / ({} - {}/2)", shown(m.mu), shown(m.lambda)),
                format!("W = 1 / ({} - {})", shown(m.mu), shown(m.half_lambda)),
                format!("W = 1 / {}", shown(m.denom)),
                format!("W = {}", shown(m.w)),
            ],
        ),
        StepKind::TimeInQueue => (
            m.wq,
            vec![
                format!(
                    "Wq = {} / ({} × {})",
                    shown(m.lambda_sq),
                    shown(m.two_mu),
                    shown(m.denom)
                ),
                format!("Wq = {} / {}", shown(m.lambda_sq), shown(m.wq_denom)),
                format!("Wq = {}", shown(m.wq)),
            ],
        ),
    };

    let mut substitution_lines = Vec::with_capacity(substituted.len() + 1);
    substitution_lines.push(symbolic.to_string());
    substitution_lines.extend(substituted);

    DerivationStep {
        kind,
        title: title(kind),
        formula: symbolic.to_string(),
        substitution_lines,
        result,
    }
}

/// The symbolic formula of a step.
pub fn formula(kind: StepKind) -> &'static str {
    match kind {
        StepKind::ArrivalRate => "λ = 1 / (interarrival time)",
        StepKind::ServiceRate => "μ = 1 / (service time)",
        StepKind::Utilization => "ρ = λ / (2μ)",
        StepKind::TimeInSystem => "W = 1 / (μ - λ/2)",
        StepKind::TimeInQueue => "Wq = λ² / (2μ(μ - λ/2))",
    }
}

/// Heading of a step, e.g. "Step 3: Compute ρ (utilization)".
pub fn title(kind: StepKind) -> String {
    format!(
        "Step {}: Compute {} ({})",
        kind.number(),
        kind.symbol(),
        kind.label()
    )
}

#[cfg(test)]
mod tests {
    use crate::compute;

    use super::*;

    #[test]
    fn worked_example_lines() {
        let calc = compute(2.0, 3.0).unwrap();
        let lines: Vec<Vec<&str>> = calc
            .steps
            .iter()
            .map(|s| s.substitution_lines.iter().map(String::as_str).collect())
            .collect();

        assert_eq!(
            lines[0],
            vec!["λ = 1 / (interarrival time)", "λ = 1 / 2", "λ = 0.5"]
        );
        assert_eq!(
            lines[1],
            vec!["μ = 1 / (service time)", "μ = 1 / 3", "μ = 0.3333"]
        );
        assert_eq!(
            lines[2],
            vec![
                "ρ = λ / (2μ)",
                "ρ = 0.5 / (2 × 0.3333)",
                "ρ = 0.5 / 0.6667",
                "ρ = 0.75",
            ]
        );
        assert_eq!(
            lines[3],
            vec![
                "W = 1 / (μ - λ/2)",
                "W = 1 / (0.3333 - 0.5/2)",
                "W = 1 / (0.3333 - 0.25)",
                "W = 1 / 0.0833",
                "W = 12",
            ]
        );
        assert_eq!(
            lines[4],
            vec![
                "Wq = λ² / (2μ(μ - λ/2))",
                "Wq = 0.25 / (0.6667 × 0.0833)",
                "Wq = 0.25 / 0.0556",
                "Wq = 4.5",
            ]
        );
    }

    #[test]
    fn first_line_is_the_formula() {
        let calc = compute(3.0, 2.5).unwrap();
        for step in &calc.steps {
            assert_eq!(step.substitution_lines[0], step.formula);
            assert_eq!(step.formula, formula(step.kind));
        }
    }

    #[test]
    fn results_keep_full_precision() {
        let calc = compute(2.0, 3.0).unwrap();
        let mu_step = &calc.steps[1];

        assert_eq!(mu_step.result, 1.0 / 3.0);
        assert_eq!(mu_step.substitution_lines.last().unwrap(), "μ = 0.3333");
        assert_eq!(calc.steps[4].result, calc.result.wq);
    }

    #[test]
    fn raw_inputs_are_not_rounded() {
        let calc = compute(1.234567, 0.5).unwrap();
        assert_eq!(calc.steps[0].substitution_lines[1], "λ = 1 / 1.234567");
        assert_eq!(calc.steps[1].substitution_lines[1], "μ = 1 / 0.5");
    }

    #[test]
    fn titles_are_numbered() {
        assert_eq!(
            title(StepKind::ArrivalRate),
            "Step 1: Compute λ (arrival rate)"
        );
        assert_eq!(
            title(StepKind::TimeInQueue),
            "Step 5: Compute Wq (waiting time in queue)"
        );
    }
}
