//! Input, result and derivation records.

/// The two intervals a calculation starts from, in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationInput {
    /// Mean time between customer arrivals.
    pub interarrival_min: f64,
    /// Mean service time at one server.
    pub service_min: f64,
}

impl CalculationInput {
    /// Create an input pair. No validation happens here; see [`compute`](crate::compute).
    pub const fn new(interarrival_min: f64, service_min: f64) -> Self {
        Self {
            interarrival_min,
            service_min,
        }
    }
}

/// Steady-state metrics of a stable M/M/2 queue.
///
/// Rates are in customers per minute, times in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationResult {
    /// Arrival rate λ.
    pub lambda: f64,
    /// Service rate of a single server μ.
    pub mu: f64,
    /// Server utilization ρ.
    pub rho: f64,
    /// Mean time a customer spends in the system.
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    pub w: f64,
    /// Mean time a customer waits before service starts.
    #[cfg_attr(feature = "serde", serde(rename = "Wq"))]
    pub wq: f64,
}

/// Which metric a derivation step produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepKind {
    /// λ, customers arriving per minute.
    ArrivalRate,
    /// μ, customers one server completes per minute.
    ServiceRate,
    /// ρ, the fraction of time each server is busy.
    Utilization,
    /// W, mean minutes a customer spends waiting plus being served.
    TimeInSystem,
    /// Wq, mean minutes a customer spends waiting for a server.
    TimeInQueue,
}

impl StepKind {
    /// All steps, in the order they are derived.
    pub const ALL: [StepKind; 5] = [
        StepKind::ArrivalRate,
        StepKind::ServiceRate,
        StepKind::Utilization,
        StepKind::TimeInSystem,
        StepKind::TimeInQueue,
    ];

    /// The symbol of the metric this step produces.
    pub const fn symbol(&self) -> &'static str {
        match self {
            StepKind::ArrivalRate => "λ",
            StepKind::ServiceRate => "μ",
            StepKind::Utilization => "ρ",
            StepKind::TimeInSystem => "W",
            StepKind::TimeInQueue => "Wq",
        }
    }

    /// Human-readable name of the metric.
    pub const fn label(&self) -> &'static str {
        match self {
            StepKind::ArrivalRate => "arrival rate",
            StepKind::ServiceRate => "service rate per server",
            StepKind::Utilization => "utilization",
            StepKind::TimeInSystem => "time in system",
            StepKind::TimeInQueue => "waiting time in queue",
        }
    }

    /// Unit of the metric, if it has one.
    pub const fn unit(&self) -> Option<&'static str> {
        match self {
            StepKind::ArrivalRate | StepKind::ServiceRate => Some("customers/minute"),
            StepKind::Utilization => None,
            StepKind::TimeInSystem | StepKind::TimeInQueue => Some("minutes"),
        }
    }

    /// Position of the step in the derivation, starting at 1.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }
}

/// One step of a worked derivation.
///
/// `substitution_lines` show values rounded for display while `result`
/// keeps full precision, the way a worked example on paper would.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivationStep {
    /// Which metric this step produces.
    pub kind: StepKind,
    /// Heading, e.g. "Step 1: Compute λ (arrival rate)".
    pub title: String,
    /// The symbolic formula.
    pub formula: String,
    /// Formula, then substituted values, then the numeric result.
    pub substitution_lines: Vec<String>,
    /// Unrounded value produced by the step.
    pub result: f64,
}

/// A complete successful calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calculation {
    /// The inputs the calculation used.
    pub input: CalculationInput,
    /// The derived metrics.
    pub result: CalculationResult,
    /// Derivation steps in the order of [`StepKind::ALL`].
    pub steps: Vec<DerivationStep>,
}

impl Calculation {
    /// Look up the step for a metric.
    pub fn step(&self, kind: StepKind) -> Option<&DerivationStep> {
        self.steps.iter().find(|s| s.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_order_and_numbers() {
        let numbers: Vec<usize> = StepKind::ALL.iter().map(|k| k.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(StepKind::ArrivalRate < StepKind::TimeInQueue);
    }

    #[test]
    fn symbols_and_units() {
        assert_eq!(StepKind::TimeInQueue.symbol(), "Wq");
        assert_eq!(StepKind::Utilization.unit(), None);
        assert_eq!(StepKind::ArrivalRate.unit(), Some("customers/minute"));
        assert_eq!(StepKind::TimeInSystem.unit(), Some("minutes"));
    }
}
