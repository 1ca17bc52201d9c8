use super::error::SchemaError;
use super::field::FieldSpec;
use std::collections::HashSet;
use std::fmt;

/// The ordered set of field declarations for model type `M`.
pub struct Schema<M> {
    fields: Vec<FieldSpec<M>>,
}

impl<M> Schema<M> {
    pub fn builder() -> SchemaBuilder<M> {
        SchemaBuilder { fields: Vec::new(), used_names: HashSet::new(), duplicate: None }
    }

    pub fn count(&self) -> usize { self.fields.len() }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec<M>> {
        self.fields.iter()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec<M>> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Fields marked for change tracking, in declaration order.
    pub fn trackable(&self) -> impl Iterator<Item = &FieldSpec<M>> {
        self.fields.iter().filter(|f| f.is_trackable())
    }

    /// Fields carrying at least one validation rule, in declaration order.
    pub fn validated(&self) -> impl Iterator<Item = &FieldSpec<M>> {
        self.fields.iter().filter(|f| f.is_validated())
    }
}

impl<M> fmt::Debug for Schema<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema").field("fields", &self.fields).finish()
    }
}

/// Collects `FieldSpec`s and checks them as a whole in `build`.
pub struct SchemaBuilder<M> {
    fields: Vec<FieldSpec<M>>,
    used_names: HashSet<&'static str>,
    // First duplicate seen; reported by `build` so `field` can stay chainable.
    duplicate: Option<&'static str>,
}

impl<M> SchemaBuilder<M> {
    pub fn field(mut self, spec: FieldSpec<M>) -> Self {
        if !self.used_names.insert(spec.name()) && self.duplicate.is_none() {
            self.duplicate = Some(spec.name());
        }
        self.fields.push(spec);
        self
    }

    pub fn build(self) -> Result<Schema<M>, SchemaError> {
        if let Some(name) = self.duplicate {
            return Err(SchemaError::DuplicateField(name.to_string()));
        }

        for spec in &self.fields {
            if spec.is_text() {
                continue;
            }
            if let Some(rule) = spec.rules().iter().find(|r| r.kind.is_format()) {
                tracing::error!(
                    field = spec.name(),
                    rule = %rule.kind,
                    "format rule declared on a non-string field"
                );
                return Err(SchemaError::FormatRuleOnNonText {
                    field: spec.name().to_string(),
                    rule: rule.kind,
                });
            }
        }

        Ok(Schema { fields: self.fields })
    }
}
