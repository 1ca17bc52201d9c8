//! Defines the error types for the change-tracking module.
use thiserror::Error;

/// A tracking operation was called in the wrong state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackingError {
    #[error("tracking not enabled")]
    NotEnabled,
    #[error("tracking already enabled")]
    AlreadyEnabled,
    #[error("'{0}' is not a trackable field")]
    UnknownField(String),
}
