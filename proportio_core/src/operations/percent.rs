//! # Percentage Calculation
//!
//! Calculates what percentage one value (the part) is of another (the
//! whole).
//!
//! ## Precondition
//!
//! - `whole != 0` (the formula divides by it)
//!
//! The part is deliberately unconstrained: zero, negative, and non-finite
//! parts all flow through the IEEE-754 arithmetic unchecked.
//!
//! ## Example
//!
//! ```rust
//! use proportio_core::operations::percent::{calculate, PercentOfInput};
//!
//! let input = PercentOfInput { part: 25.0, whole: 100.0 };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.percentage, 25.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::formulas;

/// Input parameters for a percentage calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "part": 25.0,
///   "whole": 100.0
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PercentOfInput {
    /// The part value
    pub part: f64,

    /// The whole value (must not be zero)
    pub whole: f64,
}

impl PercentOfInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.whole == 0.0 {
            return Err(CalcError::zero_denominator("whole"));
        }
        Ok(())
    }
}

/// Result of a percentage calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PercentOfOutput {
    /// The calculated percentage, unrounded. Display rounding is a
    /// frontend concern.
    pub percentage: f64,
}

/// Calculate what percentage `part` is of `whole`.
///
/// # Arguments
///
/// * `input` - Part and whole values
///
/// # Returns
///
/// * `Ok(PercentOfOutput)` - The percentage
/// * `Err(CalcError::ZeroDenominator)` - If `whole` is zero
pub fn calculate(input: &PercentOfInput) -> CalcResult<PercentOfOutput> {
    input.validate()?;

    let percentage = formulas::percentage(input.part, input.whole);

    tracing::debug!(
        part = input.part,
        whole = input.whole,
        percentage,
        "calculated percentage"
    );

    Ok(PercentOfOutput { percentage })
}

/// Scalar convenience wrapper around [`calculate`].
///
/// # Example
///
/// ```rust
/// use proportio_core::operations::percent::percent_of;
///
/// assert_eq!(percent_of(25.0, 100.0).unwrap(), 25.0);
/// assert!(percent_of(25.0, 0.0).is_err());
/// ```
pub fn percent_of(part: f64, whole: f64) -> CalcResult<f64> {
    calculate(&PercentOfInput { part, whole }).map(|out| out.percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_percentage() {
        assert_eq!(percent_of(25.0, 100.0).unwrap(), 25.0);
        assert_eq!(percent_of(1.0, 4.0).unwrap(), 25.0);
        assert_eq!(percent_of(3.0, 4.0).unwrap(), 75.0);
    }

    #[test]
    fn test_zero_part() {
        assert_eq!(percent_of(0.0, 100.0).unwrap(), 0.0);
        assert_eq!(percent_of(0.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(percent_of(-25.0, 100.0).unwrap(), -25.0);
        assert_eq!(percent_of(25.0, -100.0).unwrap(), -25.0);
        assert_eq!(percent_of(-25.0, -100.0).unwrap(), 25.0);
        assert_eq!(percent_of(10.0, -5.0).unwrap(), -200.0);
    }

    #[test]
    fn test_exact_ieee754_result() {
        // The core applies no rounding of its own
        let part = 1.0;
        let whole = 3.0;
        assert_eq!(percent_of(part, whole).unwrap(), (part / whole) * 100.0);
    }

    #[test]
    fn test_magnitude_extremes() {
        assert_eq!(percent_of(1_000_000.0, 4_000_000.0).unwrap(), 25.0);
        assert_eq!(percent_of(10.0, 1e-100).unwrap(), 1e103);
        assert!((percent_of(1e-10, 1e-8).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_whole_fails_for_every_part() {
        for part in [0.0, 10.0, -10.0, f64::INFINITY] {
            let err = percent_of(part, 0.0).unwrap_err();
            assert_eq!(
                err,
                CalcError::ZeroDenominator {
                    field: "whole".to_string()
                }
            );
        }
    }

    #[test]
    fn test_negative_zero_whole_fails() {
        assert!(percent_of(10.0, -0.0).is_err());
    }

    #[test]
    fn test_input_serde_roundtrip() {
        let input = PercentOfInput {
            part: 25.0,
            whole: 100.0,
        };
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: PercentOfInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.part, roundtrip.part);
        assert_eq!(input.whole, roundtrip.whole);
    }
}
