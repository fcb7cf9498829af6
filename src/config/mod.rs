//! Configuration types for the Shippinglabel client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: everything a [`Client`](crate::Client) needs
//! - [`ClientConfigBuilder`]: builder for [`ClientConfig`]
//! - [`ClientId`], [`ClientSecret`]: validated OAuth credentials
//! - [`BaseUrl`]: validated API base URL
//! - [`Environment`]: production or development API
//!
//! # Example
//!
//! ```rust
//! use shippinglabel::{ClientConfig, ClientId, ClientSecret, Environment};
//!
//! let config = ClientConfig::builder()
//!     .client_id(ClientId::new("my-client").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .environment(Environment::Production)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.shippinglabel.de/v2");
//! ```

mod environment;
mod newtypes;

pub use environment::{Environment, DEVELOPMENT_URL, PRODUCTION_URL};
pub use newtypes::{BaseUrl, ClientId, ClientSecret};

use crate::error::ConfigError;

/// Configuration for a [`Client`](crate::Client).
///
/// `ClientConfig` is `Clone + Send + Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    base_url: BaseUrl,
    http_client: Option<reqwest::Client>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the caller-supplied HTTP client, if any.
    #[must_use]
    pub const fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for [`ClientConfig`].
///
/// `client_id` and `client_secret` are required. The base URL defaults to
/// the development environment; [`base_url`](Self::base_url) takes
/// precedence over [`environment`](Self::environment).
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    environment: Option<Environment>,
    base_url: Option<BaseUrl>,
    http_client: Option<reqwest::Client>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Selects the production or development API.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Overrides the base URL, e.g. to point at a proxy or a mock server.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Uses the given `reqwest::Client` instead of the default one.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Prepends a product token to the default `User-Agent`.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(self.environment.unwrap_or_default().base_url())?,
        };

        Ok(ClientConfig {
            client_id,
            client_secret,
            base_url,
            http_client: self.http_client,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
