//! Reactive user identity context resolved from the page query string.

use dashboard_host::{
    resolve_eurus_metadata, unix_time_secs_now, DashboardBridgeConfig, EurusMetadata,
};
use dashboard_host_web::current_query_string;
use leptos::*;

#[derive(Clone, Copy)]
/// Leptos context carrying the identity extracted from the `token` query parameter.
pub struct EurusContext {
    /// Identity metadata; empty until the provider has mounted.
    pub metadata: ReadSignal<EurusMetadata>,
}

/// Resolves metadata from `query`, logging anything that went wrong.
///
/// An empty query logs a warning; an unreadable token logs an error. Neither is fatal.
pub fn load_eurus_metadata(query: &str, config: &DashboardBridgeConfig) -> EurusMetadata {
    let resolution = resolve_eurus_metadata(query, config);
    match &resolution.issue {
        Some(issue) if issue.is_warning() => logging::warn!("{issue}"),
        Some(issue) => logging::error!("jwt parse error: {issue}"),
        None => {}
    }
    if resolution.claims.is_expired_at(unix_time_secs_now()) {
        logging::warn!(
            "identity token for {} has expired",
            resolution.metadata.username.as_deref().unwrap_or("unknown user")
        );
    }
    resolution.metadata
}

/// Creates the metadata signal and resolves it from `query_source` after mount.
///
/// The effect body reads the query only on its first run; later reactive re-runs leave the
/// published metadata alone.
pub fn create_eurus_metadata_signal(
    query_source: impl Fn() -> String + 'static,
    config: DashboardBridgeConfig,
) -> RwSignal<EurusMetadata> {
    let metadata = create_rw_signal(EurusMetadata::default());

    create_effect(move |loaded: Option<()>| {
        if loaded.is_some() {
            return;
        }
        metadata.set(load_eurus_metadata(&query_source(), &config));
    });

    metadata
}

#[component]
/// Provides [`EurusContext`] to descendant components.
///
/// The query string is read once, after the first mount; the metadata never changes afterwards.
pub fn EurusContextProvider(
    /// Lookup names for the token parameter.
    #[prop(optional)]
    config: DashboardBridgeConfig,
    children: Children,
) -> impl IntoView {
    let metadata = create_eurus_metadata_signal(
        || current_query_string().unwrap_or_default(),
        config,
    );

    provide_context(EurusContext {
        metadata: metadata.read_only(),
    });

    children().into_view()
}

/// Returns the identity metadata, or constant empty metadata outside [`EurusContextProvider`].
pub fn use_eurus_metadata() -> Signal<EurusMetadata> {
    use_context::<EurusContext>()
        .map(|context| Signal::from(context.metadata))
        .unwrap_or_else(|| Signal::derive(EurusMetadata::default))
}
