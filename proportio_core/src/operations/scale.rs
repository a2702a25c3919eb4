//! # Ratio Scaling
//!
//! Multiplies a value by a scaling ratio. This operation has no
//! preconditions: zero, negative, and extreme-magnitude inputs are all
//! legal, and overflow to infinity or underflow to zero are acceptable
//! IEEE-754 outcomes rather than errors.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::formulas;

/// Input parameters for scaling a value by a ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScaleInput {
    /// The value to scale
    pub value: f64,

    /// The scaling ratio
    pub ratio: f64,
}

/// Result of a ratio scaling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScaleOutput {
    /// The scaled value
    pub result: f64,
}

/// Scale `value` by `ratio`.
///
/// Infallible apart from the shared result type; the `CalcResult` return
/// keeps the operation contract uniform across the core.
pub fn calculate(input: &ScaleInput) -> CalcResult<ScaleOutput> {
    let result = formulas::scaled(input.value, input.ratio);

    tracing::debug!(
        value = input.value,
        ratio = input.ratio,
        result,
        "scaled value by ratio"
    );

    Ok(ScaleOutput { result })
}

/// Scalar convenience wrapper around [`calculate`].
///
/// # Example
///
/// ```rust
/// use proportio_core::operations::scale::scale_by_ratio;
///
/// assert_eq!(scale_by_ratio(10.0, 2.5).unwrap(), 25.0);
/// ```
pub fn scale_by_ratio(value: f64, ratio: f64) -> CalcResult<f64> {
    calculate(&ScaleInput { value, ratio }).map(|out| out.result)
}
