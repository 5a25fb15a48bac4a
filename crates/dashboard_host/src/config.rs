//! Bridge configuration shared by the browser adapters and the runtime providers.

use serde::{Deserialize, Serialize};

/// Name of the global object the host dashboard injects into embedded pages.
pub const DEFAULT_HOST_GLOBAL: &str = "centraldashboard";
/// Query-string parameter that carries the identity token.
pub const DEFAULT_TOKEN_QUERY_PARAM: &str = "token";

/// Lookup names used to reach the host dashboard and the identity token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardBridgeConfig {
    /// Property of `window` holding the host dashboard client library.
    pub host_global: String,
    /// Query-string key read by the token-claims bridge.
    pub token_query_param: String,
}

impl Default for DashboardBridgeConfig {
    fn default() -> Self {
        Self {
            host_global: DEFAULT_HOST_GLOBAL.to_string(),
            token_query_param: DEFAULT_TOKEN_QUERY_PARAM.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: DashboardBridgeConfig =
            serde_json::from_str(r#"{"tokenQueryParam":"jwt"}"#).expect("config");
        assert_eq!(
            config,
            DashboardBridgeConfig {
                host_global: "centraldashboard".to_string(),
                token_query_param: "jwt".to_string(),
            }
        );
    }
}
