//! Random `state` values for the authorization redirect.

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

/// An opaque nonce passed as `state` to the authorize URL and checked again
/// when the user is redirected back.
///
/// ```rust
/// use shippinglabel::auth::oauth::StateParam;
///
/// let state = StateParam::new();
/// assert_eq!(state.as_ref().len(), 15);
/// assert!(state.matches(state.as_ref()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam(String);

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    const NONCE_LENGTH: usize = 15;

    /// Generates a fresh 15 character alphanumeric nonce.
    #[must_use]
    pub fn new() -> Self {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();
        Self(nonce)
    }

    /// Wraps a value received on the redirect, e.g. to compare it later.
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `true` if `received` equals this state.
    #[must_use]
    pub fn matches(&self, received: &str) -> bool {
        self.0 == received
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_alphanumeric_nonce() {
        let state = StateParam::new();
        assert_eq!(state.as_ref().len(), 15);
        assert!(state.as_ref().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_new_generates_distinct_values() {
        assert_ne!(StateParam::new(), StateParam::new());
    }

    #[test]
    fn test_matches() {
        let state = StateParam::from_raw("abc");
        assert!(state.matches("abc"));
        assert!(!state.matches("abd"));
        assert_eq!(state.to_string(), "abc");
    }
}
