//! Identity token payload decoding.
//!
//! Tokens use the three-part `header.payload.signature` layout. Only the payload is decoded
//! here; signature verification belongs to the API server that receives the token.

use std::collections::BTreeMap;

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Standard-alphabet decoder that tolerates missing padding and non-zero trailing bits, matching
/// the leniency of the browser's `atob`.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Claims carried in the token payload.
///
/// Known fields mirror what the identity provider issues; anything else is kept in
/// [`TokenClaims::extra`]. Decoding is lenient per field: a known claim with an unexpected type
/// is moved to `extra` instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenClaims {
    /// Login name of the authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Account type reported by the identity provider.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Owning organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Profile picture URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Contact address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Country code of the user's workplace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_country: Option<String>,
    /// Subject (`sub`).
    #[serde(rename = "sub", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Issuer (`iss`).
    #[serde(rename = "iss", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Expiry as unix seconds (`exp`).
    #[serde(rename = "exp", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    /// Issue time as unix seconds (`iat`).
    #[serde(rename = "iat", skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,
    /// Earliest valid time as unix seconds (`nbf`).
    #[serde(rename = "nbf", skip_serializing_if = "Option::is_none")]
    pub not_before: Option<i64>,
    /// Claims without a dedicated field.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl<'de> Deserialize<'de> for TokenClaims {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Self::from_claims_map)
    }
}

fn take_text(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        other => {
            map.insert(key.to_string(), other);
            None
        }
    }
}

fn take_seconds(map: &mut Map<String, Value>, key: &str) -> Option<i64> {
    match map.remove(key)? {
        Value::Null => None,
        Value::Number(number) => match number.as_i64() {
            Some(secs) => Some(secs),
            None => match number.as_f64().filter(|secs| secs.is_finite()) {
                // NumericDate may be fractional; whole seconds are enough here.
                Some(secs) => Some(secs.floor() as i64),
                None => {
                    map.insert(key.to_string(), Value::Number(number));
                    None
                }
            },
        },
        other => {
            map.insert(key.to_string(), other);
            None
        }
    }
}

impl TokenClaims {
    /// Builds claims from a decoded payload object, keeping unrecognized values in `extra`.
    pub fn from_claims_map(mut map: Map<String, Value>) -> Self {
        let username = take_text(&mut map, "username");
        let account_type = take_text(&mut map, "type");
        let organization = take_text(&mut map, "organization");
        let avatar_url = take_text(&mut map, "avatar_url");
        let email = take_text(&mut map, "email");
        let work_country = take_text(&mut map, "work_country");
        let subject = take_text(&mut map, "sub");
        let issuer = take_text(&mut map, "iss");
        let expires_at = take_seconds(&mut map, "exp");
        let issued_at = take_seconds(&mut map, "iat");
        let not_before = take_seconds(&mut map, "nbf");

        Self {
            username,
            account_type,
            organization,
            avatar_url,
            email,
            work_country,
            subject,
            issuer,
            expires_at,
            issued_at,
            not_before,
            extra: map.into_iter().collect(),
        }
    }

    /// Whether `exp` is set and at or before `now_secs`.
    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        self.expires_at
            .is_some_and(|exp| i128::from(exp) <= i128::from(now_secs))
    }

    /// Whether `nbf` is set and still in the future at `now_secs`.
    pub fn is_not_yet_valid_at(&self, now_secs: u64) -> bool {
        self.not_before
            .is_some_and(|nbf| i128::from(nbf) > i128::from(now_secs))
    }
}

/// Reasons a token payload could not be turned into [`TokenClaims`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    /// The token has no second dot-delimited segment.
    #[error("token has no payload segment")]
    MissingPayload,
    /// The payload is not valid base64url.
    #[error("payload is not valid base64: {0}")]
    Base64(String),
    /// The decoded payload bytes are not UTF-8.
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(String),
    /// The payload text is not a JSON claims object.
    #[error("payload is not a JSON claims object: {0}")]
    Json(String),
}

/// Decodes the payload segment of `token` into claims.
///
/// # Errors
///
/// Returns [`ClaimsError`] for a missing payload segment, bad base64, non-UTF-8 bytes, or a
/// payload that is not a JSON object of claims.
pub fn decode_token_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let payload = token.split('.').nth(1).ok_or(ClaimsError::MissingPayload)?;
    let standard: String = payload
        .chars()
        .map(|ch| match ch {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = PAYLOAD_ENGINE
        .decode(standard.trim())
        .map_err(|err| ClaimsError::Base64(err.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|err| ClaimsError::Utf8(err.to_string()))?;
    serde_json::from_str(&text).map_err(|err| ClaimsError::Json(err.to_string()))
}
