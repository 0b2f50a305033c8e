//! Access to the upstream API key
//!
//! The key is injected into the relay through [`SecretSource`] instead of
//! being read from ambient process state inside the handler.

use secrecy::{ExposeSecret, SecretString};
use std::env;

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Provider of the upstream API key
pub trait SecretSource: Send + Sync {
    /// Name of the secret, used in logs (never the value)
    fn name(&self) -> &'static str;

    /// Current value of the secret, `None` when it is not configured
    fn api_key(&self) -> Option<SecretString>;
}

/// Reads the key from the process environment on every call
#[derive(Debug, Clone)]
pub struct EnvSecret {
    var: &'static str,
}

impl EnvSecret {
    pub fn new(var: &'static str) -> Self {
        Self { var }
    }
}

impl Default for EnvSecret {
    fn default() -> Self {
        Self::new(GEMINI_API_KEY_VAR)
    }
}

impl SecretSource for EnvSecret {
    fn name(&self) -> &'static str {
        self.var
    }

    fn api_key(&self) -> Option<SecretString> {
        env::var(self.var)
            .ok()
            .filter(|value| !value.is_empty())
            .map(SecretString::new)
    }
}

/// Fixed key, mostly useful for tests and embedding
#[derive(Debug, Clone)]
pub struct StaticSecret {
    value: Option<SecretString>,
}

impl StaticSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(SecretString::new(value.into())),
        }
    }

    /// A source that never has a key
    pub fn missing() -> Self {
        Self { value: None }
    }
}

impl SecretSource for StaticSecret {
    fn name(&self) -> &'static str {
        GEMINI_API_KEY_VAR
    }

    fn api_key(&self) -> Option<SecretString> {
        self.value
            .as_ref()
            .filter(|value| !value.expose_secret().is_empty())
            .cloned()
    }
}
