//! Defines the error types for the validation module.
use super::rules::RuleKind;
use serde::Serialize;

/// A single failed rule on a single field.
///
/// This is a report, not a Rust error: validation failures are collected,
/// never returned through `Err` by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The name of the field that failed.
    pub field: String,
    /// The rule that was violated.
    pub rule: RuleKind,
    /// A human-readable message, either custom or generated.
    pub message: String,
}
