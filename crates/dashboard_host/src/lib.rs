//! Typed host-dashboard contracts and pure identity/namespace logic shared by the browser
//! adapters and the Leptos runtime.
//!
//! Concrete browser wiring lives in `dashboard_host_web`; reactive providers live in
//! `dashboard_runtime`. Nothing in this crate logs: failures are returned as typed errors and the
//! runtime chooses how loudly to report them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod claims;
pub mod config;
pub mod host;
pub mod metadata;
pub mod namespace;
pub mod time;

pub use claims::{decode_token_claims, ClaimsError, TokenClaims};
pub use config::{DashboardBridgeConfig, DEFAULT_HOST_GLOBAL, DEFAULT_TOKEN_QUERY_PARAM};
pub use host::{
    connect_namespace_bridge, DashboardEventHost, HostError, MemoryDashboardHost,
    MissingDashboardHost, NamespaceCallback,
};
pub use metadata::{
    resolve_eurus_metadata, token_from_query, EurusMetadata, MetadataIssue, MetadataResolution,
    JWT_TOKEN_HEADER,
};
pub use namespace::{NamespaceChangeTracker, NamespaceHandler, NamespaceService, SubscriptionId};
pub use time::{unix_time_ms_now, unix_time_secs_now};
