//! Authenticated request context.
//!
//! An [`ApiContext`] pairs a shared [`Client`] with one [`AuthToken`]. Every
//! endpoint method builds its request and hands it to [`ApiContext::send`],
//! which makes sure a valid token is attached before the request goes out.
//!
//! # Token refresh
//!
//! The token sits behind a single `tokio::sync::Mutex`. Under the lock the
//! gate checks expiry, refreshes with the stored refresh token if needed and
//! attaches the current bearer. The lock is released before the request is
//! executed, so concurrent calls only contend during the check:
//!
//! - a valid token never triggers a refresh
//! - M callers that find the token expired cause exactly one refresh; the
//!   others wait on the lock and pick up the new token
//! - a failed refresh fails the call and leaves the stored token unchanged
//!
//! Dropping a pending call cancels it. A refresh interrupted that way does not
//! touch the stored token.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::auth::AuthToken;
use crate::clients::errors::Error;
use crate::clients::http_client::Client;
use crate::clients::http_request::{HttpRequest, ResponseDecoder};
use crate::error::ConfigError;

/// A [`Client`] bound to one token.
///
/// `ApiContext` is `Send + Sync`; share it behind an [`Arc`] to issue calls
/// from several tasks at once.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use shippinglabel::{ApiContext, AuthToken, Client};
///
/// let client = Arc::new(Client::with_credentials("id", "secret")?);
/// let api = ApiContext::new(client, AuthToken::from_refresh_token("stored-refresh-token"))?;
///
/// // The first call refreshes the token, then fetches the user.
/// let user = api.get_user().await?;
/// ```
#[derive(Debug)]
pub struct ApiContext {
    client: Arc<Client>,
    token: Mutex<AuthToken>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiContext>();
};

impl ApiContext {
    /// Creates a context.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] if the token carries neither an
    /// access token nor a refresh token.
    pub fn new(client: Arc<Client>, token: AuthToken) -> Result<Self, ConfigError> {
        if token.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(Self {
            client,
            token: Mutex::new(token),
        })
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// Returns a copy of the current token, e.g. to persist a refreshed one.
    pub async fn token(&self) -> AuthToken {
        self.token.lock().await.clone()
    }

    /// Starts a request against the client's base URL.
    #[must_use]
    pub fn request<'a>(&self) -> HttpRequest<'a> {
        self.client.request()
    }

    /// Sends `request` with a valid bearer token.
    ///
    /// # Errors
    ///
    /// Returns the refresh error if the token had to be refreshed and the
    /// refresh failed; otherwise whatever [`Client::execute`] returns.
    pub async fn send<D: ResponseDecoder>(
        &self,
        mut request: HttpRequest<'_, D>,
    ) -> Result<D::Output, Error> {
        {
            let mut token = self.token.lock().await;
            if token.is_expired() {
                tracing::debug!("access token expired, refreshing");
                let issued = self.client.refresh_token(&token.refresh_token).await?;
                token.set_access_token(&issued);
                tracing::debug!(expires_at = %token.expires_at(), "access token refreshed");
            }
            request.set_bearer(&token.access_token);
        }

        self.client.execute(request).await
    }
}
