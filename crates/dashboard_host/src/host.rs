//! Host dashboard event contracts.
//!
//! The host dashboard (an external page embedding this app in an iframe) emits namespace
//! selection events through a client library it injects into the page. [`DashboardEventHost`]
//! abstracts that library so the bridge can be wired against a fake in tests and local
//! development.

use std::{cell::RefCell, rc::Rc};

use thiserror::Error;

use crate::NamespaceService;

/// Callback invoked with the namespace the host dashboard just selected.
pub type NamespaceCallback = Rc<dyn Fn(String)>;

/// Failure to reach or drive the host dashboard's event API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No browser `window` exists in the current execution context.
    #[error("browser window is unavailable")]
    WindowUnavailable,
    /// The host global was never injected into the page.
    #[error("host global `{global}` is not defined")]
    GlobalMissing {
        /// Name of the missing `window` property.
        global: String,
    },
    /// The host global exists but does not expose the expected API shape.
    #[error("host API is malformed: {detail}")]
    MalformedApi {
        /// Which part of the API was missing or of the wrong type.
        detail: String,
    },
    /// Calling the host's initializer raised an exception.
    #[error("host initializer failed: {message}")]
    InitFailed {
        /// Stringified host exception.
        message: String,
    },
}

/// Host service that delivers namespace selection events.
pub trait DashboardEventHost {
    /// Installs `callback` as the receiver for namespace selection events.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the host event API cannot be located or initialized.
    fn install_namespace_listener(&self, callback: NamespaceCallback) -> Result<(), HostError>;
}

/// Wires host namespace events into `service`.
///
/// Every namespace the host selects is stored in the service and fanned out to its handler and
/// subscribers.
///
/// # Errors
///
/// Propagates the host's [`HostError`]; the service is left untouched in that case.
pub fn connect_namespace_bridge(
    host: &dyn DashboardEventHost,
    service: &NamespaceService,
) -> Result<(), HostError> {
    let service = service.clone();
    host.install_namespace_listener(Rc::new(move |namespace: String| {
        service.set_namespace(namespace);
    }))
}

#[derive(Clone, Default)]
/// In-memory host used for local development and tests.
///
/// Namespace events are emitted explicitly with [`MemoryDashboardHost::select_namespace`].
pub struct MemoryDashboardHost {
    listener: Rc<RefCell<Option<NamespaceCallback>>>,
}

impl MemoryDashboardHost {
    /// Emits a namespace selection event to the installed listener.
    ///
    /// Returns `false` when no listener has been installed yet.
    pub fn select_namespace(&self, namespace: impl Into<String>) -> bool {
        let listener = self.listener.borrow().clone();
        match listener {
            Some(listener) => {
                listener(namespace.into());
                true
            }
            None => false,
        }
    }

    /// Returns whether a listener is installed.
    pub fn has_listener(&self) -> bool {
        self.listener.borrow().is_some()
    }
}

impl std::fmt::Debug for MemoryDashboardHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDashboardHost")
            .field("has_listener", &self.has_listener())
            .finish()
    }
}

impl DashboardEventHost for MemoryDashboardHost {
    fn install_namespace_listener(&self, callback: NamespaceCallback) -> Result<(), HostError> {
        *self.listener.borrow_mut() = Some(callback);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Host that is never present, matching a page rendered outside the dashboard.
pub struct MissingDashboardHost {
    /// Global name reported in the error.
    pub global: String,
}

impl DashboardEventHost for MissingDashboardHost {
    fn install_namespace_listener(&self, _callback: NamespaceCallback) -> Result<(), HostError> {
        Err(HostError::GlobalMissing {
            global: self.global.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn connected_bridge_stores_selected_namespace() {
        let host = MemoryDashboardHost::default();
        let service = NamespaceService::default();
        connect_namespace_bridge(&host, &service).expect("connect");

        assert!(host.select_namespace("team-a"));
        assert_eq!(service.namespace(), Some("team-a".to_string()));
    }

    #[test]
    fn missing_host_reports_single_error_and_leaves_namespace_unset() {
        let host = MissingDashboardHost {
            global: "centraldashboard".to_string(),
        };
        let service = NamespaceService::default();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        service.on_namespace_changed(move |_| seen.set(seen.get() + 1));

        let err = connect_namespace_bridge(&host, &service).expect_err("host is missing");
        assert_eq!(
            err,
            HostError::GlobalMissing {
                global: "centraldashboard".to_string()
            }
        );
        assert_eq!(err.to_string(), "host global `centraldashboard` is not defined");
        assert_eq!(service.namespace(), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn memory_host_without_listener_drops_events() {
        let host = MemoryDashboardHost::default();
        assert!(!host.has_listener());
        assert!(!host.select_namespace("team-a"));
    }
}
