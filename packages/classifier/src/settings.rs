//! Configuration snapshot and the external store collaborator.
//!
//! Settings are owned by the host platform's key-value store; this core
//! only ever reads them. One snapshot is taken at the start of each
//! classification request and discarded at its end, so concurrent requests
//! never share mutable state.

use async_trait::async_trait;

use crate::error::Result;
use crate::security::SecretString;

/// The closed set of supported classification providers.
///
/// Selection is by enum variant, so dispatch is exhaustiveness-checked at
/// compile time; the only string comparison is the one [`Provider::from_name`]
/// performs against the stored identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Groq,
    OpenRouter,
    Gemini,
    HuggingFace,
    Mistral,
    Cloudflare,
}

impl Provider {
    /// All supported providers, in settings-UI order.
    pub const ALL: [Provider; 6] = [
        Provider::Groq,
        Provider::OpenRouter,
        Provider::Gemini,
        Provider::HuggingFace,
        Provider::Mistral,
        Provider::Cloudflare,
    ];

    /// The identifier stored in the configuration store for this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Groq => "groq",
            Provider::OpenRouter => "OpenRouter",
            Provider::Gemini => "gemini",
            Provider::HuggingFace => "Hugging Face",
            Provider::Mistral => "Mistral AI",
            Provider::Cloudflare => "Cloudflare Workers AI",
        }
    }

    /// Look up a provider by its stored identifier (exact match).
    ///
    /// Returns `None` for anything outside the known set; no fallback
    /// provider is ever attempted.
    pub fn from_name(name: &str) -> Option<Provider> {
        Provider::ALL.iter().copied().find(|p| p.name() == name)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only settings snapshot for one classification request.
#[derive(Debug, Clone)]
pub struct Settings {
    /// API credential; `None` when not configured
    pub credential: Option<SecretString>,

    /// Stored provider identifier (validated against [`Provider::from_name`]
    /// at request time)
    pub provider: String,

    /// Overall enablement toggle
    pub enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            credential: None,
            provider: Provider::Groq.name().to_string(),
            enabled: true,
        }
    }
}

impl Settings {
    /// Set the credential.
    pub fn with_credential(mut self, credential: impl Into<SecretString>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Set the provider identifier.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }
}

/// External configuration store collaborator.
///
/// Implementations wrap the host platform's key-value storage. The core
/// never writes through this trait; a "live update" is simply the next
/// request observing a fresh snapshot.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the current settings snapshot.
    async fn load(&self) -> Result<Settings>;
}
