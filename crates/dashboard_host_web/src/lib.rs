//! Browser (`wasm32`) implementations of [`dashboard_host`] contracts.
//!
//! This crate reaches the host dashboard's injected client library and the page location. The
//! JS interop lives under `bridge/` with a non-wasm fallback that reports the browser as absent.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the event-host factory used by the runtime.
pub mod adapters;
mod bridge;
pub mod event_host;
pub mod location;

pub use adapters::{
    dashboard_event_host, host_strategy_name, selected_host_strategy, DashboardEventHostAdapter,
    HostStrategy,
};
pub use bridge::{EVENT_HANDLER_KEY, NAMESPACE_SELECTED_KEY};
pub use event_host::WebDashboardEventHost;
pub use location::current_query_string;
