//! Process-wide namespace state and change notification.

use std::{cell::RefCell, rc::Rc};

/// Handler invoked with each newly selected namespace.
pub type NamespaceHandler = Rc<dyn Fn(&str)>;

/// Identifier returned by [`NamespaceService::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct NamespaceState {
    namespace: Option<String>,
    handler: Option<NamespaceHandler>,
    subscribers: Vec<(SubscriptionId, NamespaceHandler)>,
    next_subscription: u64,
}

#[derive(Clone, Default)]
/// Shared handle to the currently selected namespace.
///
/// Constructed once at startup and cloned into whatever needs it. The service keeps one
/// replaceable handler slot ([`NamespaceService::on_namespace_changed`], last registration wins)
/// and an explicit subscriber list ([`NamespaceService::subscribe`]).
pub struct NamespaceService {
    inner: Rc<RefCell<NamespaceState>>,
}

impl NamespaceService {
    /// Returns the current namespace, or `None` before the host selected one.
    pub fn namespace(&self) -> Option<String> {
        self.inner.borrow().namespace.clone()
    }

    /// Stores `namespace` and notifies the handler slot, then every subscriber.
    pub fn set_namespace(&self, namespace: impl Into<String>) {
        let namespace = namespace.into();
        let (handler, subscribers) = {
            let mut state = self.inner.borrow_mut();
            state.namespace = Some(namespace.clone());
            let subscribers: Vec<NamespaceHandler> = state
                .subscribers
                .iter()
                .map(|(_, handler)| handler.clone())
                .collect();
            (state.handler.clone(), subscribers)
        };

        if let Some(handler) = handler {
            handler(&namespace);
        }
        for subscriber in subscribers {
            subscriber(&namespace);
        }
    }

    /// Replaces the registered namespace handler.
    pub fn on_namespace_changed(&self, handler: impl Fn(&str) + 'static) {
        self.inner.borrow_mut().handler = Some(Rc::new(handler));
    }

    /// Adds an independent subscriber that is notified alongside the handler slot.
    pub fn subscribe(&self, handler: impl Fn(&str) + 'static) -> SubscriptionId {
        let mut state = self.inner.borrow_mut();
        let id = SubscriptionId(state.next_subscription);
        state.next_subscription += 1;
        state.subscribers.push((id, Rc::new(handler)));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.inner.borrow_mut();
        let before = state.subscribers.len();
        state.subscribers.retain(|(existing, _)| *existing != id);
        state.subscribers.len() != before
    }

    /// Number of live subscribers, excluding the handler slot.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl std::fmt::Debug for NamespaceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("NamespaceService")
            .field("namespace", &state.namespace)
            .field("has_handler", &state.handler.is_some())
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

/// Tracks consecutive namespace observations and whether the latest one was a change.
///
/// The first observation never counts as a change: apps typically render once with no namespace
/// before the host's first event arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceChangeTracker {
    previous: Option<String>,
    changed: bool,
}

impl NamespaceChangeTracker {
    /// Returns the tracker after observing `current`.
    pub fn observe(self, current: Option<String>) -> Self {
        let changed = match self.previous.as_deref() {
            None | Some("") => false,
            Some(previous) => current.as_deref() != Some(previous),
        };
        Self {
            previous: current,
            changed,
        }
    }

    /// Whether the latest observation differed from the one before it.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// The latest observed namespace.
    pub fn latest(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |ns: &str| sink.borrow_mut().push(ns.to_string()))
    }

    #[test]
    fn namespace_is_unset_until_first_event() {
        let service = NamespaceService::default();
        assert_eq!(service.namespace(), None);
        service.set_namespace("team-a");
        assert_eq!(service.namespace(), Some("team-a".to_string()));
    }

    #[test]
    fn second_handler_replaces_the_first() {
        let service = NamespaceService::default();
        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();

        service.on_namespace_changed(first);
        service.on_namespace_changed(second);
        service.set_namespace("team-a");

        assert!(first_seen.borrow().is_empty());
        assert_eq!(*second_seen.borrow(), vec!["team-a".to_string()]);
    }

    #[test]
    fn subscribers_receive_events_until_unsubscribed() {
        let service = NamespaceService::default();
        let (a_seen, a) = recorder();
        let (b_seen, b) = recorder();
        let a_id = service.subscribe(a);
        service.subscribe(b);
        assert_eq!(service.subscriber_count(), 2);

        service.set_namespace("team-a");
        assert!(service.unsubscribe(a_id));
        assert!(!service.unsubscribe(a_id));
        service.set_namespace("team-b");

        assert_eq!(*a_seen.borrow(), vec!["team-a".to_string()]);
        assert_eq!(
            *b_seen.borrow(),
            vec!["team-a".to_string(), "team-b".to_string()]
        );
    }

    #[test]
    fn handler_may_reenter_the_service() {
        let service = NamespaceService::default();
        let observed = Rc::new(RefCell::new(None));
        let sink = observed.clone();
        let reader = service.clone();
        service.on_namespace_changed(move |_| {
            *sink.borrow_mut() = reader.namespace();
            reader.on_namespace_changed(|_| {});
        });

        service.set_namespace("team-a");
        assert_eq!(*observed.borrow(), Some("team-a".to_string()));
    }

    #[test]
    fn change_tracker_ignores_first_observation() {
        let tracker = NamespaceChangeTracker::default().observe(None);
        assert!(!tracker.changed());
        let tracker = tracker.observe(Some("team-a".to_string()));
        assert!(!tracker.changed());
        assert_eq!(tracker.latest(), Some("team-a"));
    }

    #[test]
    fn change_tracker_reports_only_differences_between_consecutive_values() {
        let tracker = NamespaceChangeTracker::default().observe(Some("team-a".to_string()));
        let tracker = tracker.observe(Some("team-a".to_string()));
        assert!(!tracker.changed());
        let tracker = tracker.observe(Some("team-b".to_string()));
        assert!(tracker.changed());
        let tracker = tracker.observe(Some("team-b".to_string()));
        assert!(!tracker.changed());
        let tracker = tracker.observe(None);
        assert!(tracker.changed());
    }

    #[test]
    fn empty_previous_namespace_counts_as_absent() {
        let tracker = NamespaceChangeTracker::default()
            .observe(Some(String::new()))
            .observe(Some("team-a".to_string()));
        assert!(!tracker.changed());
    }
}
