//! # Operation Registry
//!
//! Central registry of the five calculation operations. Each operation has
//! declared metadata: its stable name, description, argument names/types,
//! and result description. The registry is the agent-facing surface of the
//! core: a tool-invocation dispatcher introspects it to auto-generate a
//! callable-tool schema per operation, then invokes operations by name with
//! structured JSON arguments.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe operation identification via the [`Operation`] enum
//! - Full metadata for schema generation
//! - Dispatch by name with JSON arguments and JSON results
//!
//! ## Usage
//!
//! ```rust
//! use proportio_core::registry::{dispatch, Operation};
//! use serde_json::json;
//!
//! // Introspect the declared surface
//! let meta = Operation::PercentOf.metadata();
//! assert_eq!(meta.name, "percent_of");
//!
//! // Invoke by name with structured arguments
//! let result = dispatch("percent_of", &json!({ "part": 25.0, "whole": 100.0 })).unwrap();
//! assert_eq!(result["percentage"], 25.0);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::{CalcError, CalcResult};
use crate::operations::OperationRequest;

// ============================================================================
// Parameter Specification
// ============================================================================

/// Declared specification of one operation parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Stable argument name (e.g., "part", "whole")
    pub name: &'static str,
    /// Description shown to agents in the generated tool schema
    pub description: &'static str,
    /// Whether the argument must be supplied. The proportion slots are the
    /// only optional parameters: an omitted slot is the missing marker.
    pub required: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
        }
    }
}

// ============================================================================
// Operation Metadata
// ============================================================================

/// Complete declared metadata for one operation.
///
/// This struct contains everything a tool dispatcher needs to present the
/// operation to an agent: stable name, human description, argument
/// specifications, and what the success value holds.
#[derive(Debug, Clone)]
pub struct OperationMetadata {
    /// Stable operation name (e.g., "percent_of")
    pub name: &'static str,
    /// Brief description of what this operation calculates
    pub description: &'static str,
    /// Declared parameters, in signature order
    pub params: Vec<ParamSpec>,
    /// Description of the success value
    pub returns: &'static str,
}

// ============================================================================
// Operation Enum
// ============================================================================

/// All calculation operations exposed by proportio_core.
///
/// Each variant maps to one operation module with full metadata.
/// This enum is the primary interface for dispatch and introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// percentage = (part / whole) * 100
    PercentOf,
    /// Missing term of a/b = c/d by cross-multiplication
    SolveProportion,
    /// result = value * ratio
    ScaleByRatio,
    /// k = y / x in the direct variation y = kx
    DirectK,
    /// (width, height) scaled by a uniform factor
    ResizeDimensions,
}

/// Every operation, in registry order.
pub static ALL_OPERATIONS: &[Operation] = &[
    Operation::PercentOf,
    Operation::SolveProportion,
    Operation::ScaleByRatio,
    Operation::DirectK,
    Operation::ResizeDimensions,
];

impl Operation {
    /// The stable operation name used for dispatch.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::PercentOf => "percent_of",
            Operation::SolveProportion => "solve_proportion",
            Operation::ScaleByRatio => "scale_by_ratio",
            Operation::DirectK => "direct_k",
            Operation::ResizeDimensions => "resize_dimensions",
        }
    }

    /// Look an operation up by its stable name.
    pub fn from_name(name: &str) -> Option<Operation> {
        ALL_OPERATIONS.iter().copied().find(|op| op.name() == name)
    }

    /// Get the full declared metadata for this operation.
    pub fn metadata(&self) -> OperationMetadata {
        match self {
            Operation::PercentOf => OperationMetadata {
                name: "percent_of",
                description: "Calculate what percentage 'part' is of 'whole'",
                params: vec![
                    ParamSpec::required("part", "The part value"),
                    ParamSpec::required("whole", "The whole value (must not be zero)"),
                ],
                returns: "The calculated percentage, unrounded",
            },

            Operation::SolveProportion => OperationMetadata {
                name: "solve_proportion",
                description:
                    "Solve the missing term in the proportion a/b = c/d; omit exactly one slot",
                params: vec![
                    ParamSpec::optional("a", "First numerator"),
                    ParamSpec::optional("b", "First denominator"),
                    ParamSpec::optional("c", "Second numerator"),
                    ParamSpec::optional("d", "Second denominator"),
                ],
                returns: "The calculated missing value",
            },

            Operation::ScaleByRatio => OperationMetadata {
                name: "scale_by_ratio",
                description: "Scale a value by a given ratio",
                params: vec![
                    ParamSpec::required("value", "The value to scale"),
                    ParamSpec::required("ratio", "The scaling ratio"),
                ],
                returns: "The scaled value",
            },

            Operation::DirectK => OperationMetadata {
                name: "direct_k",
                description: "Find the constant of proportionality k in the direct variation y = kx",
                params: vec![
                    ParamSpec::required("x", "The x value (must not be zero)"),
                    ParamSpec::required("y", "The y value"),
                ],
                returns: "The proportionality constant k",
            },

            Operation::ResizeDimensions => OperationMetadata {
                name: "resize_dimensions",
                description: "Resize a width/height pair by a uniform scale factor",
                params: vec![
                    ParamSpec::required("width", "Original width (must be non-negative)"),
                    ParamSpec::required("height", "Original height (must be non-negative)"),
                    ParamSpec::required("scale", "Scale factor (must be positive)"),
                ],
                returns: "The new width and height",
            },
        }
    }

    /// Auto-derive the callable-tool schema for this operation.
    ///
    /// The schema is generated from [`Operation::metadata`], so the declared
    /// argument names stay in lockstep with the dispatch surface. All
    /// parameters are JSON numbers.
    pub fn tool_schema(&self) -> Value {
        let meta = self.metadata();
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for param in &meta.params {
            properties.insert(
                param.name.to_string(),
                json!({ "type": "number", "description": param.description }),
            );
            if param.required {
                required.push(param.name);
            }
        }
        json!({
            "name": meta.name,
            "description": meta.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            },
        })
    }
}

/// Tool schemas for every registered operation, in registry order.
pub fn tool_schemas() -> Vec<Value> {
    ALL_OPERATIONS.iter().map(Operation::tool_schema).collect()
}

// ============================================================================
// Dispatch
// ============================================================================

/// Invoke an operation by name with structured JSON arguments.
///
/// The argument payload is deserialized against the named operation's input
/// type, so wrong types and missing required arguments are rejected as
/// [`CalcError::InvalidArguments`] before any validation runs. Precondition
/// violations surface unchanged from the operation itself.
///
/// # Example
///
/// ```rust
/// use proportio_core::registry::dispatch;
/// use serde_json::json;
///
/// let result = dispatch("resize_dimensions",
///     &json!({ "width": 100.0, "height": 50.0, "scale": 2.0 })).unwrap();
/// assert_eq!(result["width"], 200.0);
/// ```
pub fn dispatch(name: &str, args: &Value) -> CalcResult<Value> {
    let op = Operation::from_name(name).ok_or_else(|| CalcError::unknown_operation(name))?;

    let envelope = json!({ "op": op.name(), "args": args });
    let request: OperationRequest = serde_json::from_value(envelope)
        .map_err(|e| CalcError::invalid_arguments(e.to_string()))?;

    request.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_resolves_by_name() {
        for op in ALL_OPERATIONS {
            assert_eq!(Operation::from_name(op.name()), Some(*op));
            assert_eq!(op.metadata().name, op.name());
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Operation::from_name("no_such_op"), None);
        let err = dispatch("no_such_op", &json!({})).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_OPERATION");
    }

    #[test]
    fn test_tool_schema_carries_declared_params() {
        let schema = Operation::PercentOf.tool_schema();
        assert_eq!(schema["name"], "percent_of");
        assert!(schema["input_schema"]["properties"]["part"].is_object());
        assert!(schema["input_schema"]["properties"]["whole"].is_object());
        let required = schema["input_schema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 2);
    }

    #[test]
    fn test_proportion_schema_has_no_required_slots() {
        let schema = Operation::SolveProportion.tool_schema();
        let required = schema["input_schema"]["required"].as_array().unwrap();
        assert!(required.is_empty());
        assert_eq!(
            schema["input_schema"]["properties"].as_object().unwrap().len(),
            4
        );
    }

    #[test]
    fn test_schema_count() {
        assert_eq!(tool_schemas().len(), ALL_OPERATIONS.len());
    }

    #[test]
    fn test_dispatch_each_operation() {
        let cases = [
            ("percent_of", json!({ "part": 25.0, "whole": 100.0 })),
            ("solve_proportion", json!({ "a": 3.0, "b": 4.0, "c": 6.0 })),
            ("scale_by_ratio", json!({ "value": 10.0, "ratio": 2.5 })),
            ("direct_k", json!({ "x": 5.0, "y": 15.0 })),
            (
                "resize_dimensions",
                json!({ "width": 100.0, "height": 50.0, "scale": 2.0 }),
            ),
        ];
        for (name, args) in &cases {
            assert!(dispatch(name, args).is_ok(), "dispatch failed for {name}");
        }
    }

    #[test]
    fn test_dispatch_results() {
        let result = dispatch("percent_of", &json!({ "part": 25.0, "whole": 100.0 })).unwrap();
        assert_eq!(result["percentage"], 25.0);

        let result = dispatch("solve_proportion", &json!({ "a": 3.0, "b": 4.0, "c": 6.0 })).unwrap();
        assert_eq!(result["missing"], 8.0);

        let result = dispatch("direct_k", &json!({ "x": 5.0, "y": 15.0 })).unwrap();
        assert_eq!(result["k"], 3.0);
    }

    #[test]
    fn test_dispatch_surfaces_precondition_failures() {
        let err = dispatch("percent_of", &json!({ "part": 10.0, "whole": 0.0 })).unwrap_err();
        assert_eq!(err.error_code(), "ZERO_DENOMINATOR");

        let err = dispatch("solve_proportion", &json!({ "a": 3.0, "b": 4.0 })).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MISSING_COUNT");

        let err = dispatch(
            "resize_dimensions",
            &json!({ "width": -100.0, "height": 50.0, "scale": 2.0 }),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "NEGATIVE_DIMENSION");
    }

    #[test]
    fn test_dispatch_rejects_malformed_args() {
        let err = dispatch("percent_of", &json!({ "part": "not a number" })).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENTS");
    }

    #[test]
    fn test_operation_serde_names_match_dispatch_names() {
        for op in ALL_OPERATIONS {
            let json = serde_json::to_string(op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.name()));
        }
    }
}
