//! Secret handling for provider credentials.
//!
//! The stored API key (or the Cloudflare `account:token` pair) is the only
//! secret this core touches. It is kept behind a `secrecy`-backed wrapper
//! so settings snapshots can be logged and debugged freely without the
//! credential ever appearing in output.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

/// A provider credential that renders as `[REDACTED]` everywhere.
///
/// `Debug` and `Display` never show the value; the only way to read it is
/// an explicit [`expose`](SecretString::expose) at the point of use — the
/// Latin-1 validation check and the outbound request construction.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Wrap a credential.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Read the credential for actual use (validation, request building).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
