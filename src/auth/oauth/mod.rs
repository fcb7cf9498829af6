//! OAuth 2.0 grants for the Shippinglabel API.
//!
//! The API supports three grants, all exposed as methods on
//! [`Client`](crate::Client):
//!
//! - **Client credentials** ([`Client::client_credentials`](crate::Client::client_credentials)):
//!   server-to-server access without user interaction
//! - **Authorization code** ([`Client::authorization_code`](crate::Client::authorization_code)):
//!   the user grants access on the page returned by
//!   [`Client::auth_code_url`](crate::Client::auth_code_url) and is redirected
//!   back with a `code`
//! - **Refresh token** ([`Client::refresh_token`](crate::Client::refresh_token)):
//!   renews an access token; [`ApiContext`](crate::ApiContext) does this
//!   automatically
//!
//! # Example: Authorization Code Flow
//!
//! ```rust,ignore
//! use shippinglabel::auth::oauth::StateParam;
//!
//! let state = StateParam::new();
//! let url = client.auth_code_url("https://example.com/callback", Some(state.as_ref()));
//! // Redirect the user to `url`, store `state` in the session.
//!
//! // On the callback:
//! if !state.matches(&query.state) {
//!     return Err("state mismatch");
//! }
//! let token = client.authorization_code(&query.code).await?;
//! ```

mod grants;
mod state;

pub use grants::{
    AUTHORIZE_PATH, GRANT_AUTHORIZATION_CODE, GRANT_CLIENT_CREDENTIALS, GRANT_REFRESH_TOKEN,
};
pub use state::StateParam;
