//! # Dimension Resizing
//!
//! Scales a width/height pair by a uniform factor.
//!
//! ## Preconditions, in order
//!
//! 1. `width >= 0`
//! 2. `height >= 0`
//! 3. `scale > 0`
//!
//! The checks run in that order, so when several preconditions are violated
//! at once the first one determines the reported error: negative width and
//! negative height together report the width.
//!
//! ## Example
//!
//! ```rust
//! use proportio_core::operations::resize::{calculate, ResizeInput};
//!
//! let input = ResizeInput { width: 100.0, height: 50.0, scale: 2.0 };
//! let result = calculate(&input).unwrap();
//! assert_eq!((result.width, result.height), (200.0, 100.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::formulas;

/// Input parameters for resizing dimensions.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width": 100.0,
///   "height": 50.0,
///   "scale": 2.0
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResizeInput {
    /// Original width (must be non-negative)
    pub width: f64,

    /// Original height (must be non-negative)
    pub height: f64,

    /// Uniform scale factor (must be positive)
    pub scale: f64,
}

impl ResizeInput {
    /// Validate input parameters in order: width, height, scale.
    pub fn validate(&self) -> CalcResult<()> {
        if self.width < 0.0 {
            return Err(CalcError::negative_dimension("width", self.width));
        }
        if self.height < 0.0 {
            return Err(CalcError::negative_dimension("height", self.height));
        }
        if self.scale <= 0.0 {
            return Err(CalcError::non_positive_scale(self.scale));
        }
        Ok(())
    }
}

/// New dimensions after resizing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResizeOutput {
    /// New width
    pub width: f64,

    /// New height
    pub height: f64,
}

/// Resize `width` x `height` by a uniform `scale` factor.
///
/// # Returns
///
/// * `Ok(ResizeOutput)` - Both scaled dimensions
/// * `Err(CalcError::NegativeDimension)` - If width or height is below zero
/// * `Err(CalcError::NonPositiveScale)` - If the scale factor is zero or negative
pub fn calculate(input: &ResizeInput) -> CalcResult<ResizeOutput> {
    input.validate()?;

    let width = formulas::scaled(input.width, input.scale);
    let height = formulas::scaled(input.height, input.scale);

    tracing::debug!(
        width = input.width,
        height = input.height,
        scale = input.scale,
        new_width = width,
        new_height = height,
        "resized dimensions"
    );

    Ok(ResizeOutput { width, height })
}

/// Tuple convenience wrapper around [`calculate`].
///
/// # Example
///
/// ```rust
/// use proportio_core::operations::resize::resize_dimensions;
///
/// assert_eq!(resize_dimensions(100.0, 50.0, 2.0).unwrap(), (200.0, 100.0));
/// ```
pub fn resize_dimensions(width: f64, height: f64, scale: f64) -> CalcResult<(f64, f64)> {
    calculate(&ResizeInput {
        width,
        height,
        scale,
    })
    .map(|out| (out.width, out.height))
}
