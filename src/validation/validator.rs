//! The validator that runs every declared rule against a model.
use super::error::ValidationError;
use super::model_state::ModelState;
use crate::schema::Schema;

/// Applies a schema's validation markers to one model instance.
///
/// Nothing is cached: every call reads the model's current values, so the
/// result always reflects the latest edits.
pub struct Validator<'a, M> {
    schema: &'a Schema<M>,
    model: &'a M,
}

impl<'a, M> Validator<'a, M> {
    pub fn new(schema: &'a Schema<M>, model: &'a M) -> Self {
        Self { schema, model }
    }

    /// Executes all rules on all validated fields.
    ///
    /// # Returns
    /// - `Ok(())` if every rule passes.
    /// - `Err(Vec<ValidationError>)` with every failure, in declaration order.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for spec in self.schema.validated() {
            errors.extend(self.validate_field_spec(spec));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Failures for a single field; empty when the field is valid or unknown.
    pub fn validate_field(&self, name: &str) -> Vec<ValidationError> {
        self.schema
            .field(name)
            .map(|spec| self.validate_field_spec(spec))
            .unwrap_or_default()
    }

    pub fn model_state(&self) -> ModelState {
        match self.validate() {
            Ok(()) => ModelState::new(),
            Err(errors) => ModelState::from(errors),
        }
    }

    fn validate_field_spec(&self, spec: &crate::schema::FieldSpec<M>) -> Vec<ValidationError> {
        let value = spec.accessor.inspected(self.model);
        spec.rules()
            .iter()
            .filter(|rule| !rule.kind.check(value))
            .map(|rule| ValidationError {
                field: spec.name().to_string(),
                rule: rule.kind,
                message: rule.message_for(spec.name()),
            })
            .collect()
    }
}
