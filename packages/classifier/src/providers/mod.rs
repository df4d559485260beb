//! Provider adapters for the external classification APIs.
//!
//! Each adapter translates the generic classification request into one
//! provider's wire protocol and back:
//!
//! - [`chat`] - OpenAI-compatible chat completions (Groq, OpenRouter, Mistral)
//! - [`gemini`] - Google generative-content API (credential in URL query)
//! - [`huggingface`] - zero-shot NLI classification (one request per title)
//! - [`cloudflare`] - Workers AI (split account:token credential)
//!
//! Adapters are stateless: each invocation operates only on its own
//! parameters, so concurrent classification requests never interfere.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Decision, KeywordHints};

pub mod chat;
pub mod cloudflare;
pub mod gemini;
pub mod huggingface;

pub use chat::ChatCompletions;
pub use cloudflare::WorkersAi;
pub use gemini::Gemini;
pub use huggingface::ZeroShot;

/// One capability: classify titles given credential and keyword hints.
///
/// Implementations perform exactly one outbound request per call (the
/// zero-shot adapter issues one per title, sequentially) and return one
/// decision per input title, in input order, or a typed failure. Any
/// non-success HTTP status fails immediately; there is no retry or backoff.
#[async_trait]
pub trait TitleClassifier: Send + Sync {
    /// Classify each title as show or hide.
    async fn classify(&self, titles: &[String], hints: &KeywordHints) -> Result<Vec<Decision>>;
}
