//! Defines the error types for schema construction.
use crate::validation::RuleKind;
use thiserror::Error;

/// A mistake in a model's field declarations.
///
/// These are programmer errors: a schema that fails to build is never
/// usable, so they surface when the model is first wrapped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),
    #[error("Format rule '{rule}' requires a string-valued field, but '{field}' is not a string")]
    FormatRuleOnNonText { field: String, rule: RuleKind },
}

/// A write through `Tracked::set` or `Tracked::update` named a field the
/// schema cannot serve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldAccessError {
    #[error("'{0}' is not a declared field")]
    UnknownField(String),
    #[error("Field '{field}' holds '{declared}', not '{given}'")]
    TypeMismatch { field: String, declared: &'static str, given: &'static str },
}
