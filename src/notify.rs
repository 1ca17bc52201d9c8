//! Property-change notification.
//!
//! The host UI subscribes to a model's `Notifier` and refreshes whatever is
//! bound to the property named in each notification.
use std::fmt;

/// A property whose value may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// A declared field, by name.
    Field(&'static str),
    IsChanged,
    IsValid,
    ModelState,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Field(name) => f.write_str(name),
            Property::IsChanged => f.write_str("IsChanged"),
            Property::IsValid => f.write_str("IsValid"),
            Property::ModelState => f.write_str("ModelState"),
        }
    }
}

/// Handle returned by `Notifier::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(Property)>;

/// Fan-out of property-change notifications to subscribed handlers.
///
/// Handlers run synchronously, in subscription order, on the thread that
/// raised the notification.
#[derive(Default)]
pub struct Notifier {
    handlers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self { Self::default() }

    pub fn subscribe(&mut self, handler: impl FnMut(Property) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    pub fn subscriber_count(&self) -> usize { self.handlers.len() }

    pub fn raise(&mut self, property: Property) {
        tracing::trace!(%property, subscribers = self.handlers.len(), "property changed");
        for (_, handler) in self.handlers.iter_mut() {
            handler(property);
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_handlers_receive_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();

        let first = Rc::clone(&log);
        notifier.subscribe(move |p| first.borrow_mut().push(format!("a:{}", p)));
        let second = Rc::clone(&log);
        notifier.subscribe(move |p| second.borrow_mut().push(format!("b:{}", p)));

        notifier.raise(Property::Field("Email"));
        notifier.raise(Property::IsValid);

        assert_eq!(*log.borrow(), vec!["a:Email", "b:Email", "a:IsValid", "b:IsValid"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut notifier = Notifier::new();
        let seen = Rc::clone(&count);
        let id = notifier.subscribe(move |_| *seen.borrow_mut() += 1);

        notifier.raise(Property::IsChanged);
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.raise(Property::IsChanged);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(notifier.subscriber_count(), 0);
    }
}
