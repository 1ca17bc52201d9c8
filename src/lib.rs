//! Change tracking and declarative validation for data-bound models.
//!
//! A model type declares its fields once in a [`Schema`]: typed accessors
//! plus markers saying which fields are trackable and which validation
//! rules apply. Wrapping a value in [`Tracked`] then gives it
//!
//! - a baseline snapshot (`enable_tracking`, `accept_changes`,
//!   `reject_changes`) and change queries (`is_changed`, `has_changed`);
//! - an aggregated [`ModelState`] recomputed from current values;
//! - property-change notifications for every field write and for the
//!   derived `IsChanged`, `IsValid` and `ModelState` properties.

pub mod error;
pub mod model;
pub mod notify;
pub mod schema;
pub mod tracking;
pub mod validation;

#[cfg(feature = "model_tracing")]
pub mod model_tracing;

pub use error::ModelError;
pub use model::{Model, Tracked};
pub use notify::{Notifier, Property, SubscriptionId};
pub use schema::{
    FieldAccessError, FieldSpec, FieldValue, Inspected, Schema, SchemaBuilder, SchemaError,
};
pub use tracking::TrackingError;
pub use validation::{ModelState, RuleKind, ValidationError};
