//! Leptos wiring for the host dashboard bridge.
//!
//! Exposes the bootstrap [`init`] call plus two independent reactive contexts: the namespace
//! selected in the host dashboard ([`NamespaceContextProvider`]) and the user identity carried
//! in the page's `token` query parameter ([`EurusContextProvider`]).

pub mod bootstrap;
pub mod eurus_context;
pub mod namespace_context;

pub use bootstrap::init;
pub use eurus_context::{
    create_eurus_metadata_signal, load_eurus_metadata, use_eurus_metadata, EurusContext,
    EurusContextProvider,
};
pub use namespace_context::{
    bind_namespace_signal, namespace_change_signal, use_namespace, use_namespace_change_event,
    NamespaceContext, NamespaceContextProvider,
};
