//! Application bootstrap for the host dashboard bridge.

use dashboard_host::{connect_namespace_bridge, DashboardEventHost, NamespaceService};
use leptos::logging;

/// Connects host namespace events to `service`.
///
/// Call once while the application boots. Failures (no host global, malformed host API) are
/// logged at error level and otherwise ignored, leaving the namespace unset so the UI renders
/// its no-namespace state. Returns whether the listener was installed.
pub fn init(host: &dyn DashboardEventHost, service: &NamespaceService) -> bool {
    match connect_namespace_bridge(host, service) {
        Ok(()) => true,
        Err(err) => {
            logging::error!("Failed to initialize central dashboard client: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use dashboard_host::{MemoryDashboardHost, MissingDashboardHost};

    use super::*;

    #[test]
    fn init_without_host_is_non_fatal() {
        let service = NamespaceService::default();
        let host = MissingDashboardHost {
            global: "centraldashboard".to_string(),
        };
        assert!(!init(&host, &service));
        assert_eq!(service.namespace(), None);
    }

    #[test]
    fn init_routes_host_events_into_service() {
        let service = NamespaceService::default();
        let host = MemoryDashboardHost::default();
        assert!(init(&host, &service));
        host.select_namespace("team-a");
        assert_eq!(service.namespace().as_deref(), Some("team-a"));
    }
}
