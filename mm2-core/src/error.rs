//! Error types for calculations.

use thiserror::Error;

/// What was wrong with a rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputProblem {
    /// A field was missing or blank.
    Empty,
    /// A field was zero or negative.
    NotPositive,
}

impl InputProblem {
    /// User-facing description of the problem.
    pub const fn message(&self) -> &'static str {
        match self {
            InputProblem::Empty => "input must not be empty",
            InputProblem::NotPositive => "input must be positive",
        }
    }
}

/// Errors that can occur when computing queue metrics.
///
/// Every variant is recoverable: show the message and let the user try
/// again with different inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// An input was empty or not strictly positive.
    #[error("{}", .0.message())]
    InvalidInput(InputProblem),

    /// The servers cannot keep up with arrivals (`μ - λ/2 <= 0`).
    #[error(
        "system is unstable: μ − λ/2 must be > 0; increase service rate or interarrival time"
    )]
    UnstableSystem,

    /// Input that is not a usable number reached the calculator.
    ///
    /// The detail describes the offending value and is meant for logs.
    #[error("invalid numeric input")]
    UnexpectedError(String),
}

impl CalcError {
    /// The input problem, if this is an [`InvalidInput`](CalcError::InvalidInput) error.
    pub fn input_problem(&self) -> Option<InputProblem> {
        match self {
            CalcError::InvalidInput(problem) => Some(*problem),
            _ => None,
        }
    }

    /// Short machine-readable name for the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            CalcError::InvalidInput(_) => "invalid_input",
            CalcError::UnstableSystem => "unstable_system",
            CalcError::UnexpectedError(_) => "unexpected_error",
        }
    }
}
