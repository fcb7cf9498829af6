//! Token grants and the authorization redirect URL.
//!
//! All three grants post to the token endpoint through
//! [`Client::request_token`]; they differ only in the form body.

use crate::auth::AuthToken;
use crate::clients::{Client, Error};

/// Path of the authorization endpoint, relative to the base URL.
pub const AUTHORIZE_PATH: &str = "/oauth2/authorize";

/// `grant_type` for server-to-server access.
pub const GRANT_CLIENT_CREDENTIALS: &str = "client_credentials";

/// `grant_type` for exchanging an authorization code.
pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";

/// `grant_type` for renewing an access token.
pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";

impl Client {
    /// Obtains a token with the client credentials grant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if the credentials are rejected, or a transport
    /// or decode error.
    pub async fn client_credentials(&self) -> Result<AuthToken, Error> {
        self.request_token(&[("grant_type", GRANT_CLIENT_CREDENTIALS)])
            .await
    }

    /// Exchanges the `code` received on the authorization redirect for a
    /// token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if the code is invalid or already used, or a
    /// transport or decode error.
    pub async fn authorization_code(&self, code: &str) -> Result<AuthToken, Error> {
        self.request_token(&[("grant_type", GRANT_AUTHORIZATION_CODE), ("code", code)])
            .await
    }

    /// Obtains a new access token for `refresh_token`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if the refresh token is rejected, or a transport
    /// or decode error.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<AuthToken, Error> {
        self.request_token(&[
            ("grant_type", GRANT_REFRESH_TOKEN),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    /// Builds the URL the user is sent to for granting access.
    ///
    /// `state` is only appended when given and non-empty.
    ///
    /// ```rust
    /// use shippinglabel::Client;
    ///
    /// let client = Client::with_credentials("id", "secret").unwrap();
    /// let url = client.auth_code_url("https://example.com/cb", Some("xyz"));
    /// assert_eq!(
    ///     url,
    ///     "https://api.dev.shippinglabel.de/v2/oauth2/authorize\
    ///      ?redirect_uri=https%3A%2F%2Fexample.com%2Fcb&response_type=code&state=xyz"
    /// );
    /// ```
    #[must_use]
    pub fn auth_code_url(&self, redirect_uri: &str, state: Option<&str>) -> String {
        let mut url = format!(
            "{}{AUTHORIZE_PATH}?redirect_uri={}&response_type=code",
            self.base_url(),
            urlencoding::encode(redirect_uri)
        );
        if let Some(state) = state.filter(|s| !s.is_empty()) {
            url.push_str("&state=");
            url.push_str(&urlencoding::encode(state));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::with_credentials("id", "secret").unwrap()
    }

    #[test]
    fn test_auth_code_url_without_state() {
        let url = client().auth_code_url("https://example.com/cb", None);
        assert_eq!(
            url,
            "https://api.dev.shippinglabel.de/v2/oauth2/authorize?redirect_uri=https%3A%2F%2Fexample.com%2Fcb&response_type=code"
        );
    }

    #[test]
    fn test_auth_code_url_skips_empty_state() {
        let url = client().auth_code_url("cb", Some(""));
        assert!(!url.contains("state="));
    }

    #[test]
    fn test_auth_code_url_encodes_state() {
        let url = client().auth_code_url("cb", Some("a b"));
        assert!(url.ends_with("&state=a%20b"));
    }
}
