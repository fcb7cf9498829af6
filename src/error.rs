//! Configuration error types for the Shippinglabel client.
//!
//! Every constructor that validates its input returns
//! `Result<T, ConfigError>` so that misconfiguration fails fast, before any
//! request reaches the network.
//!
//! # Example
//!
//! ```rust
//! use shippinglabel::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a [`Client`](crate::Client) or
/// an [`ApiContext`](crate::ApiContext).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide the client id issued by Shippinglabel.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the client secret issued by Shippinglabel.")]
    EmptyClientSecret,

    /// A required field was not set on the builder.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The token carries neither an access token nor a refresh token.
    #[error("Token is required: provide an access token or a refresh token.")]
    MissingToken,

    /// The environment name is not recognized.
    #[error("Invalid environment '{value}'. Expected 'production' or 'development'.")]
    InvalidEnvironment {
        /// The value that was provided.
        value: String,
    },

    /// The base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}'. Expected an absolute URL such as 'https://api.shippinglabel.de/v2'.")]
    InvalidBaseUrl {
        /// The URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_client_id_error_message() {
        let message = ConfigError::EmptyClientId.to_string();
        assert!(message.contains("Client id cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "client_secret",
        };
        let message = error.to_string();
        assert!(message.contains("client_secret"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_base_url_includes_url() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nope".to_string(),
        };
        assert!(error.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingToken;
        let _: &dyn std::error::Error = &error;
    }
}
