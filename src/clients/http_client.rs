//! Transport client for the Shippinglabel API.
//!
//! [`Client`] owns the credentials, the base URL and a connection-pooled
//! `reqwest::Client`. It executes [`HttpRequest`]s, maps error responses to
//! [`ApiError`] and issues token requests. Authenticated calls go through an
//! [`ApiContext`], created with [`Client::api_context`].

use std::sync::Arc;
use std::time::Duration;

use crate::auth::AuthToken;
use crate::clients::api_context::ApiContext;
use crate::clients::errors::{ApiError, Error};
use crate::clients::http_request::{HttpMethod, HttpRequest, ResponseDecoder};
use crate::config::{BaseUrl, ClientConfig, ClientId, ClientSecret};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path of the token endpoint, relative to the base URL.
pub const TOKEN_PATH: &str = "/oauth2/token";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
const POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Client for the Shippinglabel REST API.
///
/// The client is `Send + Sync` and cheap to share behind an [`Arc`]; the
/// underlying `reqwest::Client` pools connections across calls.
///
/// # Example
///
/// ```rust,ignore
/// use shippinglabel::Client;
///
/// let client = Client::with_credentials("client-id", "client-secret")?;
/// let token = client.client_credentials().await?;
/// let api = client.api_context(token)?;
///
/// let user = api.get_user().await?;
/// ```
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: BaseUrl,
    client_id: ClientId,
    client_secret: ClientSecret,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client from a validated configuration.
    ///
    /// When the configuration carries no `reqwest::Client`, one is built with
    /// rustls, a two minute request timeout and a pool of up to 100 idle
    /// connections per host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the default HTTP client cannot be
    /// built (e.g. TLS backend initialization fails).
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = match config.http_client() {
            Some(http) => http.clone(),
            None => Self::default_http_client(config.user_agent_prefix())?,
        };

        Ok(Self {
            http,
            base_url: config.base_url().clone(),
            client_id: config.client_id().clone(),
            client_secret: config.client_secret().clone(),
        })
    }

    /// Creates a development client from a raw client id and secret.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either value is empty.
    pub fn with_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, Error> {
        let config = ClientConfig::builder()
            .client_id(ClientId::new(client_id)?)
            .client_secret(ClientSecret::new(client_secret)?)
            .build()?;
        Self::new(config)
    }

    fn default_http_client(user_agent_prefix: Option<&str>) -> Result<reqwest::Client, Error> {
        let prefix = user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{prefix}shippinglabel-rust/{SDK_VERSION}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .build()?;
        Ok(client)
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_ref()
    }

    /// Returns the client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Starts a request against this client's base URL.
    #[must_use]
    pub fn request<'a>(&self) -> HttpRequest<'a> {
        HttpRequest::new(self.base_url.as_ref())
    }

    /// Wraps this client and `token` into an [`ApiContext`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] if the token carries neither an
    /// access token nor a refresh token.
    pub fn api_context(self: &Arc<Self>, token: AuthToken) -> Result<ApiContext, ConfigError> {
        ApiContext::new(Arc::clone(self), token)
    }

    /// Sends `request` and decodes the response.
    ///
    /// - status >= 400: the body is decoded as [`ApiError`] and returned as
    ///   [`Error::Api`]; a malformed error body yields [`Error::Decode`].
    /// - otherwise the body is handed to the request's decoder. Without a
    ///   decoder the body is discarded.
    ///
    /// The whole body is buffered in memory before decoding, including label
    /// PDFs returned for many ids at once.
    ///
    /// # Errors
    ///
    /// Any [`Error`] variant except [`Error::Config`] and [`Error::Validation`].
    pub async fn execute<D: ResponseDecoder>(
        &self,
        request: HttpRequest<'_, D>,
    ) -> Result<D::Output, Error> {
        let (request, decoder) = request.split();
        let request = request.materialize(&self.http)?;

        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        tracing::debug!(%method, %url, %status, "received response");

        let body = response.bytes().await?;

        if status.as_u16() >= 400 {
            let error: ApiError = serde_json::from_slice(&body)?;
            tracing::warn!(
                %method,
                %url,
                %status,
                code = error.code.as_deref().unwrap_or_default(),
                "API returned an error"
            );
            return Err(Error::Api(error));
        }

        decoder.decode(&body)
    }

    /// Posts form-encoded grant parameters to the token endpoint.
    ///
    /// The request is authenticated with HTTP Basic auth using the client id
    /// and secret. The returned token has its expiration time computed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if the grant is rejected, or a transport or
    /// decode error.
    pub async fn request_token<K, V>(&self, form: &[(K, V)]) -> Result<AuthToken, Error>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let request = self
            .request()
            .method(HttpMethod::Post)
            .path(TOKEN_PATH)
            .basic_auth(self.client_id.as_ref(), self.client_secret.as_ref())
            .form(form)
            .expect_json::<AuthToken>();

        let mut token = self.execute(request).await?;
        token.set_expiration_time();
        Ok(token)
    }
}
