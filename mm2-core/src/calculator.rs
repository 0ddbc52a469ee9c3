//! The M/M/2 closed-form calculation.

use crate::derivation::build_steps;
use crate::{CalcError, Calculation, CalculationInput, CalculationResult, InputProblem, SERVERS};

/// Compute the metrics and derivation for an M/M/2 queue.
///
/// `interarrival_min` is the mean time between arrivals and `service_min`
/// the mean service time of one server, both in minutes.
///
/// # Errors
///
/// - [`CalcError::InvalidInput`] if either input is zero or negative
/// - [`CalcError::UnexpectedError`] if either input is NaN or infinite, or
///   if a rate or metric overflows `f64`
/// - [`CalcError::UnstableSystem`] if `μ - λ/2 <= 0`
///
/// ```rust
/// use mm2_core::{compute, CalcError};
///
/// assert!(compute(1.0, 1.0).is_ok());
/// assert_eq!(compute(1.0, 3.0), Err(CalcError::UnstableSystem));
/// ```
pub fn compute(interarrival_min: f64, service_min: f64) -> Result<Calculation, CalcError> {
    compute_optional(Some(interarrival_min), Some(service_min))
}

/// Like [`compute`], for callers whose inputs may be missing.
///
/// A missing input is reported as [`InputProblem::Empty`] before any other
/// check runs.
pub fn compute_optional(
    interarrival_min: Option<f64>,
    service_min: Option<f64>,
) -> Result<Calculation, CalcError> {
    let (Some(interarrival_min), Some(service_min)) = (interarrival_min, service_min) else {
        return Err(CalcError::InvalidInput(InputProblem::Empty));
    };

    let input = validate(interarrival_min, service_min)?;
    let metrics = Metrics::derive(&input)?;
    let steps = build_steps(&input, &metrics);

    Ok(Calculation {
        input,
        result: metrics.result(),
        steps,
    })
}

fn validate(interarrival_min: f64, service_min: f64) -> Result<CalculationInput, CalcError> {
    if interarrival_min <= 0.0 || service_min <= 0.0 {
        return Err(CalcError::InvalidInput(InputProblem::NotPositive));
    }
    for (name, value) in [
        ("interarrival_min", interarrival_min),
        ("service_min", service_min),
    ] {
        if !value.is_finite() {
            return Err(CalcError::UnexpectedError(format!(
                "{name} is not a finite number: {value}"
            )));
        }
    }
    Ok(CalculationInput::new(interarrival_min, service_min))
}

/// Every intermediate quantity of the calculation.
///
/// The derivation text needs the intermediates (2μ, λ/2, λ², ...) as well
/// as the final metrics, so they are kept together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Metrics {
    pub lambda: f64,
    pub mu: f64,
    pub two_mu: f64,
    pub rho: f64,
    pub half_lambda: f64,
    /// `μ - λ/2`, positive for a stable system.
    pub denom: f64,
    pub w: f64,
    pub lambda_sq: f64,
    /// `2μ(μ - λ/2)`
    pub wq_denom: f64,
    pub wq: f64,
}

impl Metrics {
    pub(crate) fn derive(input: &CalculationInput) -> Result<Self, CalcError> {
        let lambda = 1.0 / input.interarrival_min;
        let mu = 1.0 / input.service_min;
        let servers = f64::from(SERVERS);

        let two_mu = servers * mu;
        let rho = lambda / two_mu;

        // μ - λ/2 > 0 is the same condition as ρ < 1 since μ > 0.
        let half_lambda = lambda / servers;
        let denom = mu - half_lambda;
        if denom.is_nan() {
            return Err(CalcError::UnexpectedError(format!(
                "rates overflow f64: λ = {lambda}, μ = {mu}"
            )));
        }
        if denom <= 0.0 {
            return Err(CalcError::UnstableSystem);
        }
        let w = 1.0 / denom;

        let lambda_sq = lambda.powi(2);
        let wq_denom = two_mu * denom;
        let wq = lambda_sq / wq_denom;

        for (name, value) in [
            ("λ", lambda),
            ("μ", mu),
            ("ρ", rho),
            ("W", w),
            ("Wq", wq),
        ] {
            if !value.is_finite() {
                return Err(CalcError::UnexpectedError(format!(
                    "{name} is not finite ({value}); rates overflow f64"
                )));
            }
        }

        Ok(Self {
            lambda,
            mu,
            two_mu,
            rho,
            half_lambda,
            denom,
            w,
            lambda_sq,
            wq_denom,
            wq,
        })
    }

    pub(crate) fn result(&self) -> CalculationResult {
        CalculationResult {
            lambda: self.lambda,
            mu: self.mu,
            rho: self.rho,
            w: self.w,
            wq: self.wq,
        }
    }
}
