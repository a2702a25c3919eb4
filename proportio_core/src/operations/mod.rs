//! # Calculation Operations
//!
//! This module contains the five calculation operations. Each operation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Output` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Output, CalcError>` - Pure calculation function
//!
//! plus a scalar convenience function with the operation's canonical name
//! (`percent_of`, `solve_proportion`, ...) for callers that do not need the
//! struct surface.
//!
//! ## Contract
//!
//! Every operation validates its preconditions before touching any
//! arithmetic. A violation aborts with a [`CalcError`](crate::errors::CalcError)
//! identifying exactly which precondition failed; there is no partial result.
//! On success the only side effect is a `tracing` debug record of the inputs
//! and result, which never alters the returned value. Operations share no
//! state and may be invoked re-entrantly from any number of callers.
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Operations
//!
//! - [`percent`] - Percentage of a whole
//! - [`proportion`] - Missing term of a proportion a/b = c/d
//! - [`scale`] - Value scaled by a ratio
//! - [`variation`] - Constant of proportionality in y = kx
//! - [`resize`] - Width/height scaled by a uniform factor

pub mod percent;
pub mod proportion;
pub mod resize;
pub mod scale;
pub mod variation;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use percent::{percent_of, PercentOfInput, PercentOfOutput};
pub use proportion::{solve_proportion, ProportionInput, ProportionOutput};
pub use resize::{resize_dimensions, ResizeInput, ResizeOutput};
pub use scale::{scale_by_ratio, ScaleInput, ScaleOutput};
pub use variation::{direct_k, DirectKInput, DirectKOutput};

/// Enum wrapper for all operation requests.
///
/// This is the serde-stable envelope the tool dispatcher and other callers
/// use to address an operation by name with structured arguments, while
/// maintaining type safety and clean serialization.
///
/// ## JSON Example
///
/// ```json
/// {
///   "op": "percent_of",
///   "args": { "part": 25.0, "whole": 100.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum OperationRequest {
    /// Percentage calculation
    PercentOf(PercentOfInput),
    /// Proportion solver
    SolveProportion(ProportionInput),
    /// Ratio scaling
    ScaleByRatio(ScaleInput),
    /// Direct-variation constant
    DirectK(DirectKInput),
    /// Dimension resizing
    ResizeDimensions(ResizeInput),
}

impl OperationRequest {
    /// Get the operation name as a string
    pub fn op_name(&self) -> &'static str {
        match self {
            OperationRequest::PercentOf(_) => "percent_of",
            OperationRequest::SolveProportion(_) => "solve_proportion",
            OperationRequest::ScaleByRatio(_) => "scale_by_ratio",
            OperationRequest::DirectK(_) => "direct_k",
            OperationRequest::ResizeDimensions(_) => "resize_dimensions",
        }
    }

    /// Run the wrapped operation and return its output as JSON.
    ///
    /// Precondition violations surface unchanged from the operation's
    /// `calculate` function.
    pub fn run(&self) -> CalcResult<serde_json::Value> {
        let to_json = |v: serde_json::Result<serde_json::Value>| {
            v.map_err(|e| CalcError::invalid_arguments(format!("result not representable: {e}")))
        };
        match self {
            OperationRequest::PercentOf(input) => {
                to_json(serde_json::to_value(percent::calculate(input)?))
            }
            OperationRequest::SolveProportion(input) => {
                to_json(serde_json::to_value(proportion::calculate(input)?))
            }
            OperationRequest::ScaleByRatio(input) => {
                to_json(serde_json::to_value(scale::calculate(input)?))
            }
            OperationRequest::DirectK(input) => {
                to_json(serde_json::to_value(variation::calculate(input)?))
            }
            OperationRequest::ResizeDimensions(input) => {
                to_json(serde_json::to_value(resize::calculate(input)?))
            }
        }
    }
}
