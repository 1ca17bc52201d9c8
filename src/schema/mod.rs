//! The statically declared field registry for a model type.
//!
//! Each model supplies a `Schema` listing its fields, their accessors and
//! their markers. Change tracking and validation walk this registry instead
//! of discovering fields at runtime.

pub use self::error::{FieldAccessError, SchemaError};
pub use self::field::FieldSpec;
pub use self::registry::{Schema, SchemaBuilder};
pub use self::value::{FieldValue, Inspected};

mod error;
mod field;
mod registry;
mod value;
