use super::error::TrackingError;
use crate::schema::Schema;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Captured values of a model's trackable fields.
///
/// Always covers every trackable field of the schema it was captured from,
/// and is only ever replaced as a whole.
pub struct Baseline {
    values: HashMap<&'static str, Box<dyn Any>>,
}

impl Baseline {
    pub fn capture<M>(schema: &Schema<M>, model: &M) -> Self {
        let values = schema
            .trackable()
            .map(|spec| (spec.name(), spec.accessor.capture(model)))
            .collect();
        Self { values }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Whether the current value of `field` differs from its captured value.
    pub fn has_changed<M>(
        &self,
        schema: &Schema<M>,
        model: &M,
        field: &str,
    ) -> Result<bool, TrackingError> {
        let spec = schema
            .field(field)
            .filter(|spec| spec.is_trackable())
            .ok_or_else(|| TrackingError::UnknownField(field.to_string()))?;
        let old = self
            .values
            .get(spec.name())
            .ok_or_else(|| TrackingError::UnknownField(field.to_string()))?;
        Ok(!spec.accessor.matches(model, old.as_ref()))
    }

    /// Names of all trackable fields whose value differs, in declaration order.
    pub fn changed_fields<M>(&self, schema: &Schema<M>, model: &M) -> Vec<&'static str> {
        schema
            .trackable()
            .filter(|spec| match self.values.get(spec.name()) {
                Some(old) => !spec.accessor.matches(model, old.as_ref()),
                None => true,
            })
            .map(|spec| spec.name())
            .collect()
    }

    pub fn is_changed<M>(&self, schema: &Schema<M>, model: &M) -> bool {
        schema.trackable().any(|spec| match self.values.get(spec.name()) {
            Some(old) => !spec.accessor.matches(model, old.as_ref()),
            None => true,
        })
    }

    /// Writes every captured value back into `model`.
    /// Returns the names of the fields that actually changed.
    pub fn restore<M>(&self, schema: &Schema<M>, model: &mut M) -> Vec<&'static str> {
        let mut restored = Vec::new();
        for spec in schema.trackable() {
            if let Some(old) = self.values.get(spec.name()) {
                if spec.accessor.restore(model, old.as_ref()) {
                    tracing::trace!(
                        field = spec.name(),
                        value = %spec.accessor.describe(model),
                        "field restored from baseline"
                    );
                    restored.push(spec.name());
                }
            }
        }
        restored
    }
}

impl fmt::Debug for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.values.keys().collect();
        names.sort();
        f.debug_struct("Baseline").field("fields", &names).finish()
    }
}
