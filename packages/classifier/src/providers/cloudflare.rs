//! Cloudflare Workers AI adapter.
//!
//! The credential encodes two colon-separated components: the account
//! identifier (part of the URL path) and the bearer token. Each component
//! is independently reduced to header-safe form before use. The request
//! carries only the two chat messages; Workers AI takes no sampling fields.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClassifyError, Result};
use crate::parse::parse_decisions;
use crate::prompt::{build_prompt, SYSTEM_INSTRUCTION};
use crate::providers::TitleClassifier;
use crate::sanitize::header_safe;
use crate::settings::Provider;
use crate::types::{Decision, KeywordHints};

/// Workers AI adapter (llama-3-8b-instruct).
#[derive(Clone)]
pub struct WorkersAi {
    client: Client,
    account_id: String,
    token: String,
    base_url: String,
    model: String,
}

impl WorkersAi {
    /// Create a new Workers AI adapter from an `account:token` credential.
    ///
    /// A credential without a colon yields an empty token; the request then
    /// fails at the API with a normal provider error.
    pub fn new(credential: &str) -> Self {
        let (account, token) = split_credential(credential);
        Self {
            client: Client::new(),
            account_id: account,
            token,
            base_url: "https://api.cloudflare.com/client/v4".to_string(),
            model: "@cf/meta/llama-3-8b-instruct".to_string(),
        }
    }

    /// Set a custom base URL (for proxies, local stand-ins).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Split an `account:token` credential and sanitize each component.
fn split_credential(credential: &str) -> (String, String) {
    let mut parts = credential.split(':');
    let account = parts.next().unwrap_or("");
    let token = parts.next().unwrap_or("");
    (header_safe(account), header_safe(token))
}

#[async_trait]
impl TitleClassifier for WorkersAi {
    async fn classify(&self, titles: &[String], hints: &KeywordHints) -> Result<Vec<Decision>> {
        let start = std::time::Instant::now();

        let request = RunRequest {
            messages: vec![
                RunMessage {
                    role: "system".to_string(),
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                RunMessage {
                    role: "user".to_string(),
                    content: build_prompt(titles, hints),
                },
            ],
        };

        let response = self
            .client
            .post(format!(
                "{}/accounts/{}/ai/run/{}",
                self.base_url, self.account_id, self.model
            ))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(provider = %Provider::Cloudflare, error = %e, "Workers AI request failed");
                ClassifyError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(provider = %Provider::Cloudflare, status = %status, body = %body, "Workers AI API error");
            return Err(ClassifyError::Provider {
                provider: Provider::Cloudflare,
                status: status.as_u16(),
                body,
            });
        }

        let run_response: RunResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::Network(e.to_string()))?;

        let raw = run_response
            .result
            .and_then(|r| r.response)
            .unwrap_or_default();

        debug!(
            provider = %Provider::Cloudflare,
            model = %self.model,
            titles = titles.len(),
            duration_ms = start.elapsed().as_millis(),
            "Workers AI classified"
        );

        Ok(parse_decisions(&raw, titles.len()))
    }
}

// Request/Response types

#[derive(Serialize)]
struct RunRequest {
    messages: Vec<RunMessage>,
}

#[derive(Serialize)]
struct RunMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct RunResponse {
    result: Option<RunResult>,
}

#[derive(Deserialize)]
struct RunResult {
    response: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_credential() {
        assert_eq!(
            split_credential("acct123:tok456"),
            ("acct123".to_string(), "tok456".to_string())
        );
    }

    #[test]
    fn test_split_credential_sanitizes_components() {
        assert_eq!(
            split_credential(" acct 123 : tok\u{20ac}456 "),
            ("acct123".to_string(), "tok456".to_string())
        );
    }

    #[test]
    fn test_split_credential_without_colon() {
        assert_eq!(
            split_credential("acctonly"),
            ("acctonly".to_string(), String::new())
        );
    }

    #[test]
    fn test_adapter_uses_credential_components() {
        let adapter = WorkersAi::new("acct123:tok456");
        assert_eq!(adapter.account_id, "acct123");
        assert_eq!(adapter.token, "tok456");
    }

    #[test]
    fn test_missing_result_parses_as_empty() {
        let parsed: RunResponse = serde_json::from_str("{}").unwrap();
        let raw = parsed.result.and_then(|r| r.response).unwrap_or_default();
        assert_eq!(parse_decisions(&raw, 2), vec![Decision::Show; 2]);
    }
}
