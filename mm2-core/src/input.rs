//! Parsing of raw text fields, as submitted through a form or command line.

use crate::{compute, CalcError, Calculation, InputProblem};

/// Compute from two raw text fields.
///
/// Both fields are checked for emptiness before either is parsed, so a
/// blank field is always reported as [`InputProblem::Empty`] even when the
/// other field holds garbage.
///
/// ```rust
/// use mm2_core::{compute_fields, CalcError, InputProblem};
///
/// assert!(compute_fields(Some(" 2 "), Some("3")).is_ok());
/// assert_eq!(
///     compute_fields(Some("2"), Some("")),
///     Err(CalcError::InvalidInput(InputProblem::Empty))
/// );
/// ```
pub fn compute_fields(
    interarrival_min: Option<&str>,
    service_min: Option<&str>,
) -> Result<Calculation, CalcError> {
    let interarrival_min = non_empty(interarrival_min);
    let service_min = non_empty(service_min);
    let (Some(interarrival_min), Some(service_min)) = (interarrival_min, service_min) else {
        return Err(CalcError::InvalidInput(InputProblem::Empty));
    };

    compute(parse_number(interarrival_min)?, parse_number(service_min)?)
}

/// Parse a single field into a number.
///
/// # Errors
///
/// - [`CalcError::InvalidInput`] with [`InputProblem::Empty`] for a missing or blank field
/// - [`CalcError::UnexpectedError`] for text that is not a finite number
pub fn parse_field(field: Option<&str>) -> Result<f64, CalcError> {
    match non_empty(field) {
        Some(text) => parse_number(text),
        None => Err(CalcError::InvalidInput(InputProblem::Empty)),
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(text: &str) -> Result<f64, CalcError> {
    let value: f64 = text
        .parse()
        .map_err(|e| CalcError::UnexpectedError(format!("could not parse {text:?}: {e}")))?;
    if !value.is_finite() {
        return Err(CalcError::UnexpectedError(format!(
            "{text:?} is not a finite number"
        )));
    }
    Ok(value)
}
