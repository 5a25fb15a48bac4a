//! Shared transport interop for the host dashboard bridge.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the adapters above it.

use dashboard_host::{HostError, NamespaceCallback};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// Property of the host global holding the event-handler class.
pub const EVENT_HANDLER_KEY: &str = "CentralDashboardEventHandler";
/// Settable property on the event-handler instance receiving namespace selections.
pub const NAMESPACE_SELECTED_KEY: &str = "onNamespaceSelected";

pub fn install_namespace_listener(
    host_global: &str,
    callback: NamespaceCallback,
) -> Result<(), HostError> {
    imp::install_namespace_listener(host_global, callback)
}

pub fn location_search() -> Option<String> {
    imp::location_search()
}
