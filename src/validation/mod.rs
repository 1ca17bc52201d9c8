//! Declarative per-field validation.
//!
//! Rules are attached to fields in the model's `Schema`. The `Validator`
//! walks every validated field, applies its rules to the current value and
//! collects the failures into a `ModelState`.

pub use self::error::ValidationError;
pub use self::model_state::ModelState;
pub use self::rules::{Rule, RuleKind};
pub use self::validator::Validator;

mod error;
mod model_state;
mod rules;
mod validator;
