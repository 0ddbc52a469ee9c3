//! Number formatting for derivation text.
//!
//! Derivations read like hand-written working, so integral values are shown
//! without a trailing `.0` and everything else uses the shortest decimal
//! text that identifies the value.

use core::fmt;

/// Format a number for display.
///
/// When `precision` is given the value is first rounded to that many
/// fractional digits. Integral values are rendered without a decimal point.
///
/// ```rust
/// use mm2_core::format_number;
///
/// assert_eq!(format_number(4.0, None), "4");
/// assert_eq!(format_number(3.5, None), "3.5");
/// assert_eq!(format_number(3.14159, Some(4)), "3.1416");
/// assert_eq!(format_number(2.00001, Some(4)), "2");
/// ```
pub fn format_number(value: f64, precision: Option<u32>) -> String {
    Formatted::new(value, precision).to_string()
}

/// Round to `digits` fractional digits.
///
/// Rounding goes through the decimal text of the value, so the result is
/// the nearest `digits`-place decimal to the exact binary value rather than
/// whatever `(x * 10^n).round() / 10^n` happens to produce.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits as usize, value)
        .parse()
        .unwrap_or(value)
}

/// A number paired with an optional display precision.
///
/// Implements [`Display`](fmt::Display) with the same rules as
/// [`format_number`], which keeps `format!` calls that build derivation
/// lines free of temporary strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formatted {
    value: f64,
    precision: Option<u32>,
}

impl Formatted {
    /// Wrap a value for display.
    pub const fn new(value: f64, precision: Option<u32>) -> Self {
        Self { value, precision }
    }

    /// Wrap a value shown exactly as given.
    pub const fn exact(value: f64) -> Self {
        Self::new(value, None)
    }

    /// Wrap a value rounded to [`DISPLAY_PRECISION`](crate::DISPLAY_PRECISION).
    pub const fn display(value: f64) -> Self {
        Self::new(value, Some(crate::DISPLAY_PRECISION))
    }

    /// The value after rounding, as it will be displayed.
    pub fn shown_value(&self) -> f64 {
        match self.precision {
            Some(digits) => round_to(self.value, digits),
            None => self.value,
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.shown_value();
        if value.is_finite() && value.fract() == 0.0 {
            // Adding zero folds -0 into 0.
            write!(f, "{}", value + 0.0)
        } else {
            write!(f, "{}", value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_drop_decimal_point() {
        assert_eq!(format_number(4.0, None), "4");
        assert_eq!(format_number(12.0, None), "12");
        assert_eq!(format_number(0.0, None), "0");
        assert_eq!(format_number(-3.0, None), "-3");
    }

    #[test]
    fn fractional_values_use_shortest_text() {
        assert_eq!(format_number(3.5, None), "3.5");
        assert_eq!(format_number(0.25, None), "0.25");
        assert_eq!(format_number(0.1, None), "0.1");
    }

    #[test]
    fn rounding_to_precision() {
        assert_eq!(format_number(3.14159, Some(4)), "3.1416");
        assert_eq!(format_number(1.0 / 3.0, Some(4)), "0.3333");
        assert_eq!(format_number(2.0 / 3.0, Some(4)), "0.6667");
        assert_eq!(format_number(1.0 / 12.0, Some(4)), "0.0833");
    }

    #[test]
    fn rounding_can_collapse_to_integer() {
        assert_eq!(format_number(2.00001, Some(4)), "2");
        assert_eq!(format_number(11.99999, Some(4)), "12");
        assert_eq!(format_number(0.00001, Some(4)), "0");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_number(-0.0, None), "0");
        assert_eq!(format_number(-0.00001, Some(4)), "0");
    }

    #[test]
    fn rounding_does_not_pad() {
        // 0.5 rounded to four places is still shown as 0.5
        assert_eq!(format_number(0.5, Some(4)), "0.5");
    }

    #[test]
    fn round_to_digits() {
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(9.99995, 0), 10.0);
        assert!(round_to(f64::NAN, 4).is_nan());
    }

    #[test]
    fn formatted_matches_format_number() {
        let value = 0.055555555;
        assert_eq!(
            Formatted::display(value).to_string(),
            format_number(value, Some(crate::DISPLAY_PRECISION))
        );
        assert_eq!(Formatted::exact(2.5).to_string(), "2.5");
        assert_eq!(Formatted::display(value).shown_value(), 0.0556);
    }
}
