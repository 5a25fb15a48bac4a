//! Reactive namespace context and change detection.

use dashboard_host::{NamespaceChangeTracker, NamespaceService};
use leptos::*;

#[derive(Clone, Copy)]
/// Leptos context carrying the namespace selected in the host dashboard.
pub struct NamespaceContext {
    /// Current namespace, `None` until the host's first selection event.
    pub namespace: ReadSignal<Option<String>>,
}

/// Creates a signal seeded from `service` that follows every later host selection.
///
/// The signal claims the service's handler slot, replacing any earlier registration.
pub fn bind_namespace_signal(service: &NamespaceService) -> RwSignal<Option<String>> {
    let namespace = create_rw_signal(service.namespace());
    service.on_namespace_changed(move |selected: &str| {
        // The provider may already be unmounted when the host fires.
        let _ = namespace.try_set(Some(selected.to_string()));
    });
    namespace
}

#[component]
/// Provides [`NamespaceContext`] to descendant components.
pub fn NamespaceContextProvider(
    /// Startup-constructed namespace service fed by the host bridge.
    service: NamespaceService,
    children: Children,
) -> impl IntoView {
    let namespace = bind_namespace_signal(&service);
    provide_context(NamespaceContext {
        namespace: namespace.read_only(),
    });

    children().into_view()
}

/// Returns the current namespace, or a constant `None` outside [`NamespaceContextProvider`].
pub fn use_namespace() -> Signal<Option<String>> {
    use_context::<NamespaceContext>()
        .map(|context| Signal::from(context.namespace))
        .unwrap_or_else(|| Signal::derive(|| None))
}

/// Derives a change flag from consecutive reads of `namespace`.
///
/// The flag is `true` only when the value differs from the one observed on the previous read
/// and a non-empty previous value exists.
pub fn namespace_change_signal(namespace: Signal<Option<String>>) -> Signal<bool> {
    let tracker = create_memo(move |previous: Option<&NamespaceChangeTracker>| {
        previous
            .cloned()
            .unwrap_or_default()
            .observe(namespace.get())
    });
    Signal::derive(move || tracker.with(NamespaceChangeTracker::changed))
}

/// Reports whether the context namespace changed since it was last observed.
pub fn use_namespace_change_event() -> Signal<bool> {
    namespace_change_signal(use_namespace())
}

#[cfg(test)]
mod tests {
    use dashboard_host::{connect_namespace_bridge, MemoryDashboardHost};

    use super::*;

    #[test]
    fn bound_signal_observes_host_selection() {
        let runtime = create_runtime();
        let host = MemoryDashboardHost::default();
        let service = NamespaceService::default();
        connect_namespace_bridge(&host, &service).expect("connect");

        let namespace = bind_namespace_signal(&service);
        assert_eq!(namespace.get_untracked(), None);
        host.select_namespace("team-a");
        assert_eq!(namespace.get_untracked().as_deref(), Some("team-a"));

        runtime.dispose();
    }

    #[test]
    fn bound_signal_is_seeded_from_existing_namespace() {
        let runtime = create_runtime();
        let service = NamespaceService::default();
        service.set_namespace("team-z");

        let namespace = bind_namespace_signal(&service);
        assert_eq!(namespace.get_untracked().as_deref(), Some("team-z"));

        runtime.dispose();
    }

    #[test]
    fn change_signal_follows_consecutive_namespace_values() {
        let runtime = create_runtime();
        let namespace = create_rw_signal(None::<String>);
        let changed = namespace_change_signal(namespace.into());

        assert!(!changed.get_untracked());
        namespace.set(Some("team-a".to_string()));
        assert!(!changed.get_untracked());
        namespace.set(Some("team-a".to_string()));
        assert!(!changed.get_untracked());
        namespace.set(Some("team-b".to_string()));
        assert!(changed.get_untracked());
        namespace.set(Some("team-b".to_string()));
        assert!(!changed.get_untracked());

        runtime.dispose();
    }
}
