//! HTTP client types for the Shippinglabel API.
//!
//! # Overview
//!
//! - [`Client`]: owns credentials and the connection pool, executes requests
//!   and issues token grants
//! - [`ApiContext`]: a client bound to one token; refreshes it when needed and
//!   hosts every endpoint method
//! - [`HttpRequest`]: one outbound call, with a typed response decoder
//! - [`Error`]: the error returned by every call
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shippinglabel::{AuthToken, Client};
//! use shippinglabel::clients::HttpMethod;
//!
//! let client = Arc::new(Client::with_credentials("id", "secret")?);
//! let api = client.api_context(AuthToken::from_refresh_token("refresh"))?;
//!
//! // Endpoint methods cover the whole API ...
//! let addresses = api.list_addresses().await?;
//!
//! // ... and `send` takes any hand-built request.
//! let request = api
//!     .request()
//!     .method(HttpMethod::Get)
//!     .path("/user")
//!     .expect_json::<serde_json::Value>();
//! let raw_user = api.send(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. A failed attempt, including a failed token refresh, is returned to
//! the caller as is.

mod api_context;
mod errors;
mod http_client;
mod http_request;

pub use api_context::ApiContext;
pub use errors::{ApiError, Error, ValidationError};
pub use http_client::{Client, SDK_VERSION, TOKEN_PATH};
pub use http_request::{
    Binary, Discard, HttpMethod, HttpRequest, Json, ResponseDecoder, CONTENT_TYPE_FORM,
    CONTENT_TYPE_JSON,
};
