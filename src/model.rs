//! The tracked, validated model wrapper.
//!
//! `Tracked<M>` owns a user model together with its schema, the baseline
//! snapshot and a notifier. Reads go straight through `Deref`; writes go
//! through `set`/`update` so that every field change is announced along with
//! the derived `IsChanged`, `IsValid` and `ModelState` properties.
use crate::notify::{Notifier, Property, SubscriptionId};
use crate::schema::{FieldAccessError, FieldValue, Schema, SchemaError};
use crate::tracking::{Baseline, TrackingError};
use crate::validation::{ModelState, Validator};
use std::any::{type_name, Any};
use std::fmt;
use std::ops::Deref;

/// A model type that declares its fields.
pub trait Model: Sized + 'static {
    fn schema() -> Result<Schema<Self>, SchemaError>;
}

pub struct Tracked<M: Model> {
    model: M,
    schema: Schema<M>,
    // `None` until tracking is enabled.
    baseline: Option<Baseline>,
    notifier: Notifier,
}

impl<M: Model> Tracked<M> {
    /// Wraps `model`, building its schema. Tracking starts disabled.
    pub fn new(model: M) -> Result<Self, SchemaError> {
        let schema = M::schema()?;
        tracing::debug!(
            fields = schema.count(),
            trackable = schema.trackable().count(),
            validated = schema.validated().count(),
            "model schema built"
        );
        Ok(Self { model, schema, baseline: None, notifier: Notifier::new() })
    }

    pub fn schema(&self) -> &Schema<M> { &self.schema }

    pub fn into_inner(self) -> M { self.model }

    // --- Notification ---

    pub fn subscribe(&mut self, handler: impl FnMut(Property) + 'static) -> SubscriptionId {
        self.notifier.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Assigns `value` to the declared field `field` if it differs from the
    /// current value, then raises the field's notifications.
    ///
    /// Returns whether the value changed. Fails when `field` is not declared
    /// or `T` is not the field's declared type.
    pub fn set<T: FieldValue>(&mut self, field: &str, value: T) -> Result<bool, FieldAccessError> {
        let spec = self
            .schema
            .field(field)
            .ok_or_else(|| FieldAccessError::UnknownField(field.to_string()))?;
        let name = spec.name();
        let slot = spec.accessor.slot(&mut self.model).downcast_mut::<T>().ok_or_else(|| {
            FieldAccessError::TypeMismatch {
                field: name.to_string(),
                declared: spec.accessor.type_name(),
                given: type_name::<T>(),
            }
        })?;

        if *slot == value {
            return Ok(false);
        }
        *slot = value;
        self.notify_written(&[name]);
        Ok(true)
    }

    /// Runs an arbitrary in-place edit and always raises the notifications
    /// of `field`.
    ///
    /// Any other declared field the edit changes is announced as well, so
    /// the derived properties stay correct whatever the edit touches.
    pub fn update<R>(
        &mut self,
        field: &str,
        edit: impl FnOnce(&mut M) -> R,
    ) -> Result<R, FieldAccessError> {
        let name = self
            .schema
            .field(field)
            .map(|spec| spec.name())
            .ok_or_else(|| FieldAccessError::UnknownField(field.to_string()))?;

        let before: Vec<Box<dyn Any>> =
            self.schema.fields().map(|spec| spec.accessor.capture(&self.model)).collect();
        let out = edit(&mut self.model);

        let mut written = vec![name];
        for (spec, old) in self.schema.fields().zip(&before) {
            if spec.name() != name && !spec.accessor.matches(&self.model, old.as_ref()) {
                written.push(spec.name());
            }
        }
        self.notify_written(&written);
        Ok(out)
    }

    /// Raises `Field` for every written name, then each derived property
    /// at most once.
    fn notify_written(&mut self, names: &[&'static str]) {
        let (mut tracked, mut validated) = (false, false);
        for &name in names {
            self.notifier.raise(Property::Field(name));
            if let Some(spec) = self.schema.field(name) {
                tracked |= spec.is_trackable();
                validated |= spec.is_validated();
            }
        }

        if tracked && self.baseline.is_some() {
            self.notifier.raise(Property::IsChanged);
        }
        if validated {
            self.notifier.raise(Property::IsValid);
            self.notifier.raise(Property::ModelState);
        }
    }

    // --- Change tracking ---

    pub fn is_tracking(&self) -> bool { self.baseline.is_some() }

    /// Captures the current values of all trackable fields as the baseline.
    pub fn enable_tracking(&mut self) -> Result<(), TrackingError> {
        if self.baseline.is_some() {
            tracing::warn!("enable_tracking called while tracking is already enabled");
            return Err(TrackingError::AlreadyEnabled);
        }
        let baseline = Baseline::capture(&self.schema, &self.model);
        tracing::debug!(trackable = baseline.len(), "change tracking enabled");
        self.baseline = Some(baseline);
        Ok(())
    }

    /// Makes the current values the new baseline.
    pub fn accept_changes(&mut self) -> Result<(), TrackingError> {
        let baseline = self.baseline.as_mut().ok_or_else(not_enabled)?;
        *baseline = Baseline::capture(&self.schema, &self.model);
        tracing::debug!(trackable = baseline.len(), "changes accepted");
        self.notifier.raise(Property::IsChanged);
        Ok(())
    }

    /// Restores every trackable field to its baseline value.
    pub fn reject_changes(&mut self) -> Result<(), TrackingError> {
        let baseline = self.baseline.as_ref().ok_or_else(not_enabled)?;
        let restored = baseline.restore(&self.schema, &mut self.model);
        tracing::debug!(restored = restored.len(), "changes rejected");
        self.notify_written(&restored);
        Ok(())
    }

    /// Whether any trackable field differs from the baseline.
    /// Always `false` while tracking is disabled.
    pub fn is_changed(&self) -> bool {
        self.baseline
            .as_ref()
            .is_some_and(|baseline| baseline.is_changed(&self.schema, &self.model))
    }

    pub fn has_changed(&self, field: &str) -> Result<bool, TrackingError> {
        let baseline = self.baseline.as_ref().ok_or_else(not_enabled)?;
        baseline.has_changed(&self.schema, &self.model, field)
    }

    pub fn changed_fields(&self) -> Result<Vec<&'static str>, TrackingError> {
        let baseline = self.baseline.as_ref().ok_or_else(not_enabled)?;
        Ok(baseline.changed_fields(&self.schema, &self.model))
    }

    // --- Validation ---

    /// Recomputed from the current values on every call.
    pub fn model_state(&self) -> ModelState {
        Validator::new(&self.schema, &self.model).model_state()
    }

    pub fn is_valid(&self) -> bool {
        self.model_state().is_empty()
    }

    pub fn errors_for(&self, field: &str) -> Vec<String> {
        Validator::new(&self.schema, &self.model)
            .validate_field(field)
            .into_iter()
            .map(|err| err.message)
            .collect()
    }
}

fn not_enabled() -> TrackingError {
    tracing::warn!("tracking operation called before enable_tracking");
    TrackingError::NotEnabled
}

impl<M: Model> Deref for Tracked<M> {
    type Target = M;

    fn deref(&self) -> &M {
        &self.model
    }
}

impl<M: Model + fmt::Debug> fmt::Debug for Tracked<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("model", &self.model)
            .field("baseline", &self.baseline)
            .field("notifier", &self.notifier)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Profile {
        name: String,
        email: Option<String>,
        tags: Vec<String>,
        age: u32,
    }

    impl Model for Profile {
        fn schema() -> Result<Schema<Self>, SchemaError> {
            Schema::builder()
                .field(
                    FieldSpec::new("Name", |p: &Profile| &p.name, |p: &mut Profile| &mut p.name)
                        .trackable()
                        .required(),
                )
                .field(
                    FieldSpec::new("Email", |p: &Profile| &p.email, |p: &mut Profile| &mut p.email)
                        .email(),
                )
                .field(
                    FieldSpec::new("Tags", |p: &Profile| &p.tags, |p: &mut Profile| &mut p.tags)
                        .trackable(),
                )
                .field(FieldSpec::new("Age", |p: &Profile| &p.age, |p: &mut Profile| &mut p.age))
                .build()
        }
    }

    fn ada() -> Profile {
        Profile { name: "Ada".into(), ..Default::default() }
    }

    fn recorder(tracked: &mut Tracked<Profile>) -> Rc<RefCell<Vec<String>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        tracked.subscribe(move |p| sink.borrow_mut().push(p.to_string()));
        log
    }

    #[test]
    fn test_tracking_preconditions() {
        let mut tracked = Tracked::new(Profile::default()).unwrap();
        assert!(!tracked.is_tracking());
        assert!(!tracked.is_changed());
        assert_eq!(tracked.has_changed("Name"), Err(TrackingError::NotEnabled));
        assert_eq!(tracked.accept_changes(), Err(TrackingError::NotEnabled));
        assert_eq!(tracked.reject_changes(), Err(TrackingError::NotEnabled));
        assert_eq!(tracked.changed_fields(), Err(TrackingError::NotEnabled));

        tracked.enable_tracking().unwrap();
        assert_eq!(tracked.enable_tracking(), Err(TrackingError::AlreadyEnabled));
    }

    #[test]
    fn test_set_skips_equal_values() {
        let mut tracked = Tracked::new(Profile::default()).unwrap();
        let log = recorder(&mut tracked);

        assert_eq!(tracked.set("Name", String::new()), Ok(false));
        assert!(log.borrow().is_empty());

        assert_eq!(tracked.set("Name", "Ada".to_string()), Ok(true));
        assert_eq!(tracked.name, "Ada");
    }

    #[test]
    fn test_set_rejects_unknown_name_and_wrong_type() {
        let mut tracked = Tracked::new(ada()).unwrap();
        tracked.enable_tracking().unwrap();
        let log = recorder(&mut tracked);

        assert_eq!(
            tracked.set("Nmae", String::new()),
            Err(FieldAccessError::UnknownField("Nmae".into()))
        );
        assert_eq!(
            tracked.set("Name", None::<String>),
            Err(FieldAccessError::TypeMismatch {
                field: "Name".into(),
                declared: type_name::<String>(),
                given: type_name::<Option<String>>(),
            })
        );

        assert_eq!(tracked.name, "Ada");
        assert!(!tracked.is_changed());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_notifications_before_and_after_tracking() {
        let mut tracked = Tracked::new(Profile::default()).unwrap();
        let log = recorder(&mut tracked);

        tracked.set("Name", "Ada".to_string()).unwrap();
        assert_eq!(*log.borrow(), vec!["Name", "IsValid", "ModelState"]);
        log.borrow_mut().clear();

        tracked.enable_tracking().unwrap();
        tracked.set("Name", "Grace".to_string()).unwrap();
        assert_eq!(*log.borrow(), vec!["Name", "IsChanged", "IsValid", "ModelState"]);
        log.borrow_mut().clear();

        tracked.update("Tags", |p| p.tags.push("vip".into())).unwrap();
        assert_eq!(*log.borrow(), vec!["Tags", "IsChanged"]);
        log.borrow_mut().clear();

        // Declared but neither trackable nor validated: only its own notification.
        tracked.set("Age", 3u32).unwrap();
        assert_eq!(*log.borrow(), vec!["Age"]);
    }

    #[test]
    fn test_update_announces_every_field_the_edit_touched() {
        let mut tracked = Tracked::new(ada()).unwrap();
        tracked.enable_tracking().unwrap();
        let log = recorder(&mut tracked);

        tracked
            .update("Age", |p| {
                p.email = Some("bad".into());
                p.name = "Grace".into();
            })
            .unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["Age", "Name", "Email", "IsChanged", "IsValid", "ModelState"]
        );
        assert!(tracked.is_changed());
        assert!(!tracked.is_valid());
    }

    #[test]
    fn test_update_rejects_unknown_name_without_running_edit() {
        let mut tracked = Tracked::new(Profile::default()).unwrap();
        let result = tracked.update("Nmae", |p| p.name = "Ada".into());
        assert_eq!(result, Err(FieldAccessError::UnknownField("Nmae".into())));
        assert!(tracked.name.is_empty());
    }

    #[test]
    fn test_reject_restores_and_notifies() {
        let mut tracked = Tracked::new(ada()).unwrap();
        tracked.enable_tracking().unwrap();
        tracked.set("Name", "Grace".to_string()).unwrap();
        tracked.update("Tags", |p| p.tags.push("new".into())).unwrap();
        assert_eq!(tracked.changed_fields(), Ok(vec!["Name", "Tags"]));

        let log = recorder(&mut tracked);
        tracked.reject_changes().unwrap();

        assert_eq!(tracked.name, "Ada");
        assert!(tracked.tags.is_empty());
        assert!(!tracked.is_changed());
        assert_eq!(*log.borrow(), vec!["Name", "Tags", "IsChanged", "IsValid", "ModelState"]);
    }

    #[test]
    fn test_validation_tracks_current_values() {
        let mut tracked = Tracked::new(Profile::default()).unwrap();
        assert!(!tracked.is_valid());
        assert_eq!(tracked.errors_for("Name"), vec!["The Name field is required.".to_string()]);

        tracked.set("Name", "Ada".to_string()).unwrap();
        tracked.set("Email", Some("ada-at-home".to_string())).unwrap();
        let state = tracked.model_state();
        assert_eq!(state.len(), 1);
        assert!(state.contains("Email"));

        tracked.set("Email", None::<String>).unwrap();
        assert!(tracked.is_valid());
        assert!(tracked.errors_for("Email").is_empty());
    }
}
