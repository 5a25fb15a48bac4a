//! Browser adapter for the host dashboard's injected event API.

use dashboard_host::{
    DashboardBridgeConfig, DashboardEventHost, HostError, NamespaceCallback, DEFAULT_HOST_GLOBAL,
};

use crate::bridge;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Event host backed by `window.<host_global>.CentralDashboardEventHandler`.
pub struct WebDashboardEventHost {
    host_global: String,
}

impl WebDashboardEventHost {
    /// Creates an adapter reading the host library from `window[host_global]`.
    pub fn new(host_global: impl Into<String>) -> Self {
        Self {
            host_global: host_global.into(),
        }
    }

    /// Creates an adapter using the configured global name.
    pub fn from_config(config: &DashboardBridgeConfig) -> Self {
        Self::new(config.host_global.clone())
    }

    /// Name of the `window` property this adapter reads.
    pub fn host_global(&self) -> &str {
        &self.host_global
    }
}

impl Default for WebDashboardEventHost {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_GLOBAL)
    }
}

impl DashboardEventHost for WebDashboardEventHost {
    fn install_namespace_listener(&self, callback: NamespaceCallback) -> Result<(), HostError> {
        bridge::install_namespace_listener(&self.host_global, callback)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reads_global_name_from_config() {
        let config = DashboardBridgeConfig {
            host_global: "hostDashboard".to_string(),
            ..DashboardBridgeConfig::default()
        };
        assert_eq!(
            WebDashboardEventHost::from_config(&config).host_global(),
            "hostDashboard"
        );
        assert_eq!(
            WebDashboardEventHost::default().host_global(),
            "centraldashboard"
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_builds_report_missing_window() {
        let host = WebDashboardEventHost::default();
        assert_eq!(
            host.install_namespace_listener(Rc::new(|_| {})),
            Err(HostError::WindowUnavailable)
        );
    }
}
