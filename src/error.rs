//! Crate-level error for call sites that both build and drive a model.
use crate::schema::{FieldAccessError, SchemaError};
use crate::tracking::TrackingError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Field access error: {0}")]
    Access(#[from] FieldAccessError),
    #[error("Tracking error: {0}")]
    Tracking(#[from] TrackingError),
}
