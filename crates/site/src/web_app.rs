use dashboard_host::{DashboardBridgeConfig, NamespaceService};
use dashboard_host_web::{dashboard_event_host, host_strategy_name};
use dashboard_runtime::{
    init, use_eurus_metadata, use_namespace, use_namespace_change_event, EurusContextProvider,
    NamespaceContextProvider,
};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let config = DashboardBridgeConfig::default();
    let service = NamespaceService::default();
    let host = dashboard_event_host(&config);
    if init(&host, &service) {
        logging::log!("dashboard bridge connected via {} host", host_strategy_name());
    }

    view! {
        <Title text="Pipelines" />

        <NamespaceContextProvider service=service>
            <EurusContextProvider config=config>
                <main class="site-root">
                    <DashboardStatus />
                </main>
            </EurusContextProvider>
        </NamespaceContextProvider>
    }
}

#[component]
pub fn DashboardStatus() -> impl IntoView {
    let namespace = use_namespace();
    let namespace_changed = use_namespace_change_event();
    let metadata = use_eurus_metadata();

    create_effect(move |_| {
        if namespace_changed.get() {
            logging::log!(
                "namespace switched to {}",
                namespace.get_untracked().unwrap_or_default()
            );
        }
    });

    view! {
        <section class="dashboard-status">
            <p>
                {move || match namespace.get() {
                    Some(namespace) => format!("Namespace: {namespace}"),
                    None => "No namespace selected".to_string(),
                }}
            </p>
            <p>
                {move || match metadata.with(|metadata| metadata.username.clone()) {
                    Some(username) => format!("Signed in as {username}"),
                    None => "Anonymous".to_string(),
                }}
            </p>
        </section>
    }
}
