//! The aggregated validation report for a model.
use super::error::ValidationError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field name to the messages of every rule that field currently violates.
///
/// Fields without violations are absent, so an empty `ModelState` means the
/// model is valid. Serializes as a plain JSON object:
/// `{"Email": ["The Email field is not a valid e-mail address."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelState {
    errors: BTreeMap<String, Vec<String>>,
}

impl ModelState {
    pub fn new() -> Self { Self::default() }

    pub fn is_empty(&self) -> bool { self.errors.is_empty() }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize { self.errors.len() }

    /// Total number of messages across all fields.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Appends a message for `field`, keeping earlier messages in order.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Vec<ValidationError>> for ModelState {
    fn from(errors: Vec<ValidationError>) -> Self {
        let mut state = ModelState::new();
        for err in errors {
            state.add_error(err.field, err.message);
        }
        state
    }
}
