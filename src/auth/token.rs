//! Access/refresh token pair with expiry tracking.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// Lifetimes are clamped to +-100 years so the instant arithmetic cannot overflow.
const MAX_LIFETIME_SECS: i64 = 100 * 365 * 24 * 60 * 60;

/// An OAuth token as issued by `POST /oauth2/token`.
///
/// The expiration instant is derived from `expires_in` and recomputed on
/// every change through [`replace`](Self::replace),
/// [`set_access_token`](Self::set_access_token) and
/// [`set_expiration_time`](Self::set_expiration_time). A token that was just
/// deserialized reads as expired until its expiration time is computed.
///
/// The token does no locking of its own; [`ApiContext`](crate::ApiContext)
/// guards it.
///
/// # Example
///
/// ```rust
/// use shippinglabel::AuthToken;
///
/// // A bare refresh token has no known lifetime and is refreshed on first use.
/// let token = AuthToken::from_refresh_token("refresh-token");
/// assert!(token.is_expired());
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    /// The bearer credential.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_token: String,

    /// Lifetime of the access token in seconds, as issued.
    #[serde(default)]
    pub expires_in: i64,

    /// Credential used to obtain a new access token.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refresh_token: String,

    /// Token type, normally `Bearer`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token_type: String,

    #[serde(skip, default = "Utc::now")]
    expires_at: DateTime<Utc>,
}

impl AuthToken {
    /// Creates a token from its parts and computes its expiration time.
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: i64,
    ) -> Self {
        let mut token = Self {
            access_token: access_token.into(),
            expires_in,
            refresh_token: refresh_token.into(),
            token_type: "Bearer".to_string(),
            expires_at: Utc::now(),
        };
        token.set_expiration_time();
        token
    }

    /// Creates a token that holds only a refresh token.
    ///
    /// `expires_in` is zero, so the token is expired right away and the first
    /// call through an [`ApiContext`](crate::ApiContext) refreshes it.
    #[must_use]
    pub fn from_refresh_token(refresh_token: impl Into<String>) -> Self {
        Self::new(String::new(), refresh_token, 0)
    }

    /// Recomputes the expiration instant as `now + expires_in`.
    pub fn set_expiration_time(&mut self) {
        let lifetime = self.expires_in.clamp(-MAX_LIFETIME_SECS, MAX_LIFETIME_SECS);
        self.expires_at = Utc::now() + Duration::seconds(lifetime);
    }

    /// Returns `true` once the expiration instant has been reached.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Returns the computed expiration instant.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Overwrites the access token and its lifetime.
    ///
    /// The refresh token and token type are left untouched.
    pub fn replace(&mut self, access_token: impl Into<String>, expires_in: i64) {
        self.access_token = access_token.into();
        self.expires_in = expires_in;
        self.set_expiration_time();
    }

    /// Takes the access token and lifetime from a freshly issued token.
    pub fn set_access_token(&mut self, issued: &Self) {
        self.replace(issued.access_token.clone(), issued.expires_in);
    }

    /// Returns `true` if the token carries neither credential.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty() && self.refresh_token.is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("access_token", &"*****")
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &"*****")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthToken>();
};
