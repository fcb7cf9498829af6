//! Authentication types for the Shippinglabel API.
//!
//! - [`AuthToken`]: access/refresh token pair with expiry tracking
//! - [`oauth`]: token grants and the authorization redirect URL
//!
//! # Example
//!
//! ```rust
//! use shippinglabel::AuthToken;
//!
//! let token = AuthToken::new("access", "refresh", 3600);
//! assert!(!token.is_expired());
//! ```

pub mod oauth;
mod token;

pub use token::AuthToken;
