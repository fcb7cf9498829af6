//! # Shippinglabel API Rust SDK
//!
//! An async client for the Shippinglabel REST API: addresses, parcels,
//! carrier accounts, shipments, labels, the shipment queue, jobs and CSV
//! import profiles.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for credentials and the base URL
//! - OAuth 2.0 grants (client credentials, authorization code, refresh token)
//!   via [`auth::oauth`]
//! - [`ApiContext`], which refreshes an expired token transparently and
//!   exactly once, however many calls are waiting
//! - Typed records and endpoint methods for every resource in [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shippinglabel::{ClientConfig, ClientId, ClientSecret, Environment};
//!
//! let config = ClientConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .environment(Environment::Production)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shippinglabel::{Client, ClientConfig};
//! use shippinglabel::resources::Address;
//!
//! let client = Arc::new(Client::new(config)?);
//! let token = client.client_credentials().await?;
//! let api = client.api_context(token)?;
//!
//! let address = api
//!     .create_address(&Address {
//!         city: Some("Berlin".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Stored Refresh Tokens
//!
//! ```rust,ignore
//! use shippinglabel::AuthToken;
//!
//! // The first call refreshes the token; persist `api.token().await` afterwards.
//! let api = client.api_context(AuthToken::from_refresh_token(stored))?;
//! let user = api.get_user().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Every failure is returned to the caller as is

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use auth::AuthToken;
pub use clients::{ApiContext, ApiError, Client, Error, ValidationError};
pub use config::{
    BaseUrl, ClientConfig, ClientConfigBuilder, ClientId, ClientSecret, Environment,
};
pub use error::ConfigError;
