//! Adapter selection by provider.

use crate::providers::{ChatCompletions, Gemini, TitleClassifier, WorkersAi, ZeroShot};
use crate::sanitize::header_safe;
use crate::settings::Provider;

/// Build the adapter for a provider from the configured credential.
///
/// The credential is reduced to header-safe form before it reaches any
/// adapter. The match is exhaustive over the closed provider set; unknown
/// identifiers are rejected earlier, at the string-to-enum step, and never
/// get here (or to the network).
pub fn classifier_for(provider: Provider, credential: &str) -> Box<dyn TitleClassifier> {
    let api_key = header_safe(credential);
    match provider {
        Provider::Groq => Box::new(ChatCompletions::groq(api_key)),
        Provider::OpenRouter => Box::new(ChatCompletions::openrouter(api_key)),
        Provider::Mistral => Box::new(ChatCompletions::mistral(api_key)),
        Provider::Gemini => Box::new(Gemini::new(api_key)),
        Provider::HuggingFace => Box::new(ZeroShot::new(api_key)),
        Provider::Cloudflare => Box::new(WorkersAi::new(&api_key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_provider_has_an_adapter() {
        for provider in Provider::ALL {
            // Construction must not panic for any variant.
            let _ = classifier_for(provider, "key");
        }
    }
}
