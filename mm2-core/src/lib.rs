//! # mm2-core
//!
//! Steady-state metrics for an M/M/2 queue (Poisson arrivals, exponential
//! service, two identical servers), together with a worked derivation of
//! every metric suitable for showing to a student.
//!
//! ## Design Goals
//!
//! - **Pure**: every entry point is a function of its inputs, with no I/O,
//!   logging or shared state, so it can be called from any thread
//! - **Explainable**: each metric comes with the formula, the substituted
//!   values and the numeric result, in the order a textbook would show them
//! - **Optional serialization**: enable the `serde` feature to serialize
//!   inputs, results and derivation steps
//!
//! ## Formulas
//!
//! ```text
//! λ  = 1 / interarrival_min
//! μ  = 1 / service_min
//! ρ  = λ / (2μ)
//! W  = 1 / (μ - λ/2)
//! Wq = λ² / (2μ(μ - λ/2))
//! ```
//!
//! The system is stable only while `μ - λ/2 > 0`.
//!
//! ## Example
//!
//! ```rust
//! use mm2_core::{compute, StepKind};
//!
//! let calc = compute(2.0, 3.0).unwrap();
//!
//! assert_eq!(calc.result.lambda, 0.5);
//! assert!((calc.result.w - 12.0).abs() < 1e-9);
//! assert_eq!(calc.steps.len(), 5);
//! assert_eq!(calc.steps[3].kind, StepKind::TimeInSystem);
//! assert_eq!(calc.steps[3].substitution_lines.last().unwrap(), "W = 12");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all model types

mod calculator;
mod derivation;
mod error;
mod format;
mod input;
mod model;

pub use calculator::*;
pub use derivation::*;
pub use error::*;
pub use format::*;
pub use input::*;
pub use model::*;

/// Number of fractional digits used when numbers are shown in a derivation.
///
/// Renderers that reproduce derivation text must round with this precision
/// so that their output agrees with the substitution lines.
pub const DISPLAY_PRECISION: u32 = 4;

/// Number of parallel servers in the model.
pub const SERVERS: u32 = 2;
