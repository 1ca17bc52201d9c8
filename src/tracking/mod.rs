//! Snapshot-based change tracking.
//!
//! A `Baseline` records the values of every trackable field at one moment.
//! Later comparisons against it tell whether, and which, fields have changed.

pub use self::baseline::Baseline;
pub use self::error::TrackingError;

mod baseline;
mod error;
