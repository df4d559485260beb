//! OpenAI-compatible chat completions adapter.
//!
//! Three of the supported providers (Groq, OpenRouter, Mistral) expose the
//! same chat-completions wire shape, so they share this adapter and differ
//! only in endpoint, model, and whether an output-token budget is sent.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClassifyError, Result};
use crate::parse::parse_decisions;
use crate::prompt::{build_prompt, SYSTEM_INSTRUCTION};
use crate::providers::TitleClassifier;
use crate::settings::Provider;
use crate::types::{Decision, KeywordHints};

/// Chat-completions adapter, parameterized per provider.
#[derive(Clone)]
pub struct ChatCompletions {
    client: Client,
    provider: Provider,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl ChatCompletions {
    /// Groq adapter (llama-3.1-8b-instant).
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            provider: Provider::Groq,
            api_key: api_key.into(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.2,
            max_tokens: Some(256),
        }
    }

    /// OpenRouter adapter (free nemotron tier, no token budget field).
    pub fn openrouter(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            provider: Provider::OpenRouter,
            api_key: api_key.into(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "nvidia/nemotron-nano-12b-v2-vl:free".to_string(),
            temperature: 0.2,
            max_tokens: None,
        }
    }

    /// Mistral adapter (mistral-small-latest).
    pub fn mistral(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            provider: Provider::Mistral,
            api_key: api_key.into(),
            base_url: "https://api.mistral.ai/v1".to_string(),
            model: "mistral-small-latest".to_string(),
            temperature: 0.2,
            max_tokens: Some(256),
        }
    }

    /// Set a custom base URL (for proxies, local stand-ins).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// The provider this adapter instance targets.
    pub fn provider(&self) -> Provider {
        self.provider
    }
}

#[async_trait]
impl TitleClassifier for ChatCompletions {
    async fn classify(&self, titles: &[String], hints: &KeywordHints) -> Result<Vec<Decision>> {
        let start = std::time::Instant::now();

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(titles, hints),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(provider = %self.provider, error = %e, "chat completion request failed");
                ClassifyError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(provider = %self.provider, status = %status, body = %body, "chat completion API error");
            return Err(ClassifyError::Provider {
                provider: self.provider,
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::Network(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ClassifyError::Malformed("response contained no choices".into()))?;

        debug!(
            provider = %self.provider,
            model = %self.model,
            titles = titles.len(),
            duration_ms = start.elapsed().as_millis(),
            "chat completion classified"
        );

        Ok(parse_decisions(&content, titles.len()))
    }
}

// Request/Response types

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_constructors() {
        assert_eq!(ChatCompletions::groq("k").provider(), Provider::Groq);
        assert_eq!(
            ChatCompletions::openrouter("k").provider(),
            Provider::OpenRouter
        );
        assert_eq!(ChatCompletions::mistral("k").provider(), Provider::Mistral);
    }

    #[test]
    fn test_openrouter_omits_token_budget() {
        let adapter = ChatCompletions::openrouter("k");
        assert_eq!(adapter.max_tokens, None);

        let request = ChatRequest {
            model: adapter.model.clone(),
            messages: vec![],
            temperature: adapter.temperature,
            max_tokens: adapter.max_tokens,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_groq_request_serializes_token_budget() {
        let adapter = ChatCompletions::groq("k");
        let request = ChatRequest {
            model: adapter.model.clone(),
            messages: vec![],
            temperature: adapter.temperature,
            max_tokens: adapter.max_tokens,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 256);
        assert_eq!(json["model"], "llama-3.1-8b-instant");
    }

    #[test]
    fn test_base_url_override() {
        let adapter = ChatCompletions::groq("k").with_base_url("http://localhost:9999");
        assert_eq!(adapter.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_response_content_extraction() {
        let raw = r#"{"choices":[{"message":{"content":"EDUCATIONAL\nDISTRACTING"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = parsed.choices.into_iter().next().unwrap().message.content;
        assert_eq!(
            parse_decisions(&content, 2),
            vec![Decision::Show, Decision::Hide]
        );
    }
}
