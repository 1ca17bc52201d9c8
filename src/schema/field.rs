//! Defines `FieldSpec`, a single entry in a model's schema.
//!
//! A spec pairs a field name with typed accessors and the markers
//! (trackable, validation rules) attached to it. The typed accessors are
//! erased behind `Accessor<M>` so one schema can hold fields of any type.
use super::value::{FieldValue, Inspected};
use crate::validation::{Rule, RuleKind};
use std::any::Any;
use std::fmt;

/// Type-erased access to one field of a model.
pub(crate) trait Accessor<M> {
    /// Clones the current value for storage in a baseline snapshot.
    fn capture(&self, model: &M) -> Box<dyn Any>;
    /// Whether the current value equals a previously captured one.
    fn matches(&self, model: &M, baseline: &dyn Any) -> bool;
    /// Writes a previously captured value back. Returns whether the field changed.
    fn restore(&self, model: &mut M, baseline: &dyn Any) -> bool;
    /// Mutable access to the field, for callers that downcast to the declared type.
    fn slot<'a>(&self, model: &'a mut M) -> &'a mut dyn Any;
    fn type_name(&self) -> &'static str;
    fn inspected<'a>(&self, model: &'a M) -> Inspected<'a>;
    fn describe(&self, model: &M) -> String;
}

struct Typed<M, T> {
    get: fn(&M) -> &T,
    get_mut: fn(&mut M) -> &mut T,
}

impl<M, T: FieldValue> Accessor<M> for Typed<M, T> {
    fn capture(&self, model: &M) -> Box<dyn Any> {
        Box::new((self.get)(model).clone())
    }

    fn matches(&self, model: &M, baseline: &dyn Any) -> bool {
        // A baseline of another type cannot come from this accessor; count it as a change.
        baseline
            .downcast_ref::<T>()
            .is_some_and(|old| old == (self.get)(model))
    }

    fn restore(&self, model: &mut M, baseline: &dyn Any) -> bool {
        match baseline.downcast_ref::<T>() {
            Some(old) if old != (self.get)(model) => {
                *(self.get_mut)(model) = old.clone();
                true
            }
            _ => false,
        }
    }

    fn slot<'a>(&self, model: &'a mut M) -> &'a mut dyn Any {
        (self.get_mut)(model)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn inspected<'a>(&self, model: &'a M) -> Inspected<'a> {
        (self.get)(model).inspected()
    }

    fn describe(&self, model: &M) -> String {
        format!("{:?}", (self.get)(model))
    }
}

/// The declaration of one field: its name, accessors and markers.
///
/// ```
/// use tracked_model::FieldSpec;
///
/// struct Contact { email: Option<String> }
///
/// let spec = FieldSpec::new("Email", |c: &Contact| &c.email, |c: &mut Contact| &mut c.email)
///     .trackable()
///     .email();
/// assert!(spec.is_trackable());
/// ```
pub struct FieldSpec<M> {
    name: &'static str,
    trackable: bool,
    is_text: bool,
    rules: Vec<Rule>,
    pub(crate) accessor: Box<dyn Accessor<M>>,
}

impl<M: 'static> FieldSpec<M> {
    pub fn new<T: FieldValue>(
        name: &'static str,
        get: fn(&M) -> &T,
        get_mut: fn(&mut M) -> &mut T,
    ) -> Self {
        Self {
            name,
            trackable: false,
            is_text: T::IS_TEXT,
            rules: Vec::new(),
            accessor: Box::new(Typed { get, get_mut }),
        }
    }
}

impl<M> FieldSpec<M> {
    /// Marks the field for change tracking.
    pub fn trackable(mut self) -> Self {
        self.trackable = true;
        self
    }

    pub fn required(self) -> Self {
        self.rule(RuleKind::Required, None)
    }

    pub fn required_with_message(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Required, Some(message.into()))
    }

    pub fn email(self) -> Self {
        self.rule(RuleKind::Email, None)
    }

    pub fn email_with_message(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Email, Some(message.into()))
    }

    pub fn phone(self) -> Self {
        self.rule(RuleKind::Phone, None)
    }

    pub fn phone_with_message(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Phone, Some(message.into()))
    }

    fn rule(mut self, kind: RuleKind, message: Option<String>) -> Self {
        self.rules.push(Rule { kind, message });
        self
    }

    pub fn name(&self) -> &'static str { self.name }
    pub fn is_trackable(&self) -> bool { self.trackable }
    pub fn is_text(&self) -> bool { self.is_text }
    pub fn rules(&self) -> &[Rule] { &self.rules }
    pub fn is_validated(&self) -> bool { !self.rules.is_empty() }
}

impl<M> fmt::Debug for FieldSpec<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("trackable", &self.trackable)
            .field("is_text", &self.is_text)
            .field("rules", &self.rules)
            .finish()
    }
}
