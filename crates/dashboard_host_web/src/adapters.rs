use dashboard_host::{
    DashboardBridgeConfig, DashboardEventHost, HostError, MemoryDashboardHost, NamespaceCallback,
};

use crate::WebDashboardEventHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `dashboard_host_web` adapters.
pub enum HostStrategy {
    /// The host dashboard's injected browser global.
    Browser,
    /// In-memory host for running outside the dashboard.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "dashboard-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "dashboard-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete event host behind [`DashboardEventHost`].
#[derive(Debug, Clone)]
pub enum DashboardEventHostAdapter {
    /// Browser global injected by the host dashboard.
    Browser(WebDashboardEventHost),
    /// In-memory host driven by the embedding code.
    Stub(MemoryDashboardHost),
}

impl DashboardEventHost for DashboardEventHostAdapter {
    fn install_namespace_listener(&self, callback: NamespaceCallback) -> Result<(), HostError> {
        match self {
            Self::Browser(host) => host.install_namespace_listener(callback),
            Self::Stub(host) => host.install_namespace_listener(callback),
        }
    }
}

/// Builds the event host for the compile-time selected strategy.
pub fn dashboard_event_host(config: &DashboardBridgeConfig) -> DashboardEventHostAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            DashboardEventHostAdapter::Browser(WebDashboardEventHost::from_config(config))
        }
        HostStrategy::Stub => DashboardEventHostAdapter::Stub(MemoryDashboardHost::default()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strategy_name_matches_selected_strategy() {
        let expected = if cfg!(feature = "dashboard-host-stub") {
            "stub"
        } else {
            "browser"
        };
        assert_eq!(host_strategy_name(), expected);
    }

    #[test]
    fn stub_adapter_forwards_listener_installation() {
        let memory = MemoryDashboardHost::default();
        let adapter = DashboardEventHostAdapter::Stub(memory.clone());
        let service = dashboard_host::NamespaceService::default();

        dashboard_host::connect_namespace_bridge(&adapter, &service).expect("connect");
        assert!(memory.select_namespace("team-a"));
        assert_eq!(service.namespace().as_deref(), Some("team-a"));
    }
}
