//! Shippinglabel API environments.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Base URL of the production API.
pub const PRODUCTION_URL: &str = "https://api.shippinglabel.de/v2";

/// Base URL of the development (sandbox) API.
pub const DEVELOPMENT_URL: &str = "https://api.dev.shippinglabel.de/v2";

/// The API environment a client talks to.
///
/// New clients default to [`Environment::Development`] so that nothing is
/// shipped for real until production is selected explicitly.
///
/// ```rust
/// use shippinglabel::Environment;
///
/// let env: Environment = "production".parse().unwrap();
/// assert_eq!(env.base_url(), "https://api.shippinglabel.de/v2");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The live API; labels created here are billed.
    Production,
    /// The sandbox API.
    #[default]
    Development,
}

impl Environment {
    /// Returns the base URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Development => DEVELOPMENT_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Development => f.write_str("development"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidEnvironment {
                value: s.to_string(),
            }),
        }
    }
}
