//! User identity metadata derived from the page's query string.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{decode_token_claims, ClaimsError, DashboardBridgeConfig, TokenClaims};

/// Request header the API server reads the identity token from.
pub const JWT_TOKEN_HEADER: &str = "x-jwt-token";

/// Identity published to the UI: who the user is and the raw token proving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EurusMetadata {
    /// `username` claim from the token payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Raw token exactly as it appeared in the query string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt_token: Option<String>,
}

impl EurusMetadata {
    /// Whether the token yielded a username.
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// Header pair for forwarding the token on API calls, if a non-blank token is present.
    pub fn jwt_header(&self) -> Option<(&'static str, &str)> {
        self.jwt_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .map(|token| (JWT_TOKEN_HEADER, token))
    }
}

/// Non-fatal problem encountered while resolving [`EurusMetadata`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataIssue {
    /// The page was opened without any query parameters.
    #[error("query string is empty, skipping user claims")]
    EmptyQuery,
    /// The token was missing or its payload could not be decoded.
    #[error("token claims could not be read: {0}")]
    Claims(#[from] ClaimsError),
}

impl MetadataIssue {
    /// Whether the issue is expected in normal use and only warrants a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyQuery)
    }
}

/// Outcome of [`resolve_eurus_metadata`]; metadata is always usable even when `issue` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataResolution {
    /// Metadata to publish.
    pub metadata: EurusMetadata,
    /// Decoded claims, empty when decoding failed.
    pub claims: TokenClaims,
    /// Problem to report, if any.
    pub issue: Option<MetadataIssue>,
}

/// Reads `param` from a URL query string using URL-search-params rules.
///
/// A leading `?` is ignored, `+` decodes to a space, and the first occurrence wins.
pub fn token_from_query(query: &str, param: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query_component(key) == param).then(|| decode_query_component(value))
        })
}

fn decode_query_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

/// Builds [`EurusMetadata`] from the page query string.
///
/// An empty query leaves the metadata empty. A missing or undecodable token still publishes the
/// raw token (if any) with no username.
pub fn resolve_eurus_metadata(query: &str, config: &DashboardBridgeConfig) -> MetadataResolution {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        return MetadataResolution {
            issue: Some(MetadataIssue::EmptyQuery),
            ..MetadataResolution::default()
        };
    }

    let jwt_token = token_from_query(query, &config.token_query_param);
    let (claims, issue) = match decode_token_claims(jwt_token.as_deref().unwrap_or_default()) {
        Ok(claims) => (claims, None),
        Err(err) => (TokenClaims::default(), Some(MetadataIssue::from(err))),
    };

    MetadataResolution {
        metadata: EurusMetadata {
            username: claims.username.clone(),
            jwt_token,
        },
        claims,
        issue,
    }
}
