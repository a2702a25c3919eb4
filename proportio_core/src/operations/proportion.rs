//! # Proportion Solver
//!
//! Solves the missing term in a proportion `a/b = c/d`. Exactly one of the
//! four slots carries the missing marker (`None`); the other three must be
//! known. Resolution uses cross-multiplication `a·d = b·c` solved for the
//! missing term.
//!
//! ## Preconditions, in order
//!
//! 1. Exactly one slot is missing, whichever it is. Violations report the
//!    observed missing count before any arithmetic is considered.
//! 2. The divisor used by the selected branch is nonzero. Only the divisor
//!    actually used is checked; the other known values may be zero.
//!
//! | Missing | Formula | Divisor checked |
//! |---------|------------------|-----------------|
//! | a | `(b·c) / d` | d |
//! | b | `(a·d) / c` | c |
//! | c | `(a·d) / b` | b |
//! | d | `(b·c) / a` | a |
//!
//! ## Example
//!
//! ```rust
//! use proportio_core::operations::proportion::{calculate, ProportionInput};
//!
//! // 3/4 = 6/d
//! let input = ProportionInput { a: Some(3.0), b: Some(4.0), c: Some(6.0), d: None };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.missing, 8.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::formulas;

/// Input slots for a proportion `a/b = c/d`.
///
/// `None` is the missing marker: it denotes the slot to solve for and is
/// distinct from every numeric value including zero. Absent fields
/// deserialize as missing, so a JSON caller simply omits the unknown slot.
///
/// ## JSON Example
///
/// ```json
/// {
///   "a": 3.0,
///   "b": 4.0,
///   "c": 6.0
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProportionInput {
    /// First numerator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,

    /// First denominator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,

    /// Second numerator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<f64>,

    /// Second denominator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
}

impl ProportionInput {
    /// Count how many slots carry the missing marker.
    pub fn missing_count(&self) -> usize {
        [self.a, self.b, self.c, self.d]
            .iter()
            .filter(|v| v.is_none())
            .count()
    }

    /// Validate input parameters: exactly-one-missing first, then the
    /// zero check on the single divisor the selected branch divides by.
    pub fn validate(&self) -> CalcResult<()> {
        let count = self.missing_count();
        if count != 1 {
            return Err(CalcError::invalid_missing_count(count));
        }

        let (field, divisor) = if self.a.is_none() {
            ("d", self.d)
        } else if self.b.is_none() {
            ("c", self.c)
        } else if self.c.is_none() {
            ("b", self.b)
        } else {
            ("a", self.a)
        };
        if divisor == Some(0.0) {
            return Err(CalcError::zero_denominator(field));
        }
        Ok(())
    }
}

/// Result of a proportion solve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProportionOutput {
    /// The calculated missing value
    pub missing: f64,
}

/// Solve the missing term in the proportion `a/b = c/d`.
///
/// # Arguments
///
/// * `input` - The four slots, exactly one of them missing
///
/// # Returns
///
/// * `Ok(ProportionOutput)` - The solved value
/// * `Err(CalcError::InvalidMissingCount)` - If the missing count is not one
/// * `Err(CalcError::ZeroDenominator)` - If the branch divisor is zero
pub fn calculate(input: &ProportionInput) -> CalcResult<ProportionOutput> {
    input.validate()?;

    let missing = match (input.a, input.b, input.c, input.d) {
        (None, Some(b), Some(c), Some(d)) => formulas::cross_solve(b, c, d),
        (Some(a), None, Some(c), Some(d)) => formulas::cross_solve(a, d, c),
        (Some(a), Some(b), None, Some(d)) => formulas::cross_solve(a, d, b),
        (Some(a), Some(b), Some(c), None) => formulas::cross_solve(b, c, a),
        // validate() already rejected every other shape
        _ => return Err(CalcError::invalid_missing_count(input.missing_count())),
    };

    tracing::debug!(
        a = ?input.a,
        b = ?input.b,
        c = ?input.c,
        d = ?input.d,
        missing,
        "solved proportion"
    );

    Ok(ProportionOutput { missing })
}

/// Scalar convenience wrapper around [`calculate`].
///
/// # Example
///
/// ```rust
/// use proportio_core::operations::proportion::solve_proportion;
///
/// assert_eq!(solve_proportion(Some(3.0), Some(4.0), Some(6.0), None).unwrap(), 8.0);
/// ```
pub fn solve_proportion(
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
    d: Option<f64>,
) -> CalcResult<f64> {
    calculate(&ProportionInput { a, b, c, d }).map(|out| out.missing)
}
