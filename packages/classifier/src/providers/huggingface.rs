//! Hugging Face zero-shot classification adapter.
//!
//! Unlike the batched providers this issues one natural-language-inference
//! request per title: the title is the premise and "educational" /
//! "distracting" are the candidate labels, with the keyword hints embedded
//! in the hypothesis template. Requests run sequentially, so cost and
//! latency scale linearly with title count.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClassifyError, Result};
use crate::providers::TitleClassifier;
use crate::settings::Provider;
use crate::types::{Decision, KeywordHints};

/// Zero-shot NLI adapter (bart-large-mnli).
#[derive(Clone)]
pub struct ZeroShot {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl ZeroShot {
    /// Create a new zero-shot adapter with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api-inference.huggingface.co".to_string(),
            model: "facebook/bart-large-mnli".to_string(),
        }
    }

    /// Set a custom base URL (for proxies, local stand-ins).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn hypothesis_template(hints: &KeywordHints) -> String {
        format!(
            "This video title is {{label}} given user preferences: show=[{}] hide=[{}].",
            hints.show.join(", "),
            hints.hide.join(", ")
        )
    }

    async fn classify_one(&self, title: &str, hypothesis: &str) -> Result<Decision> {
        let request = InferenceRequest {
            inputs: title.to_string(),
            parameters: InferenceParameters {
                candidate_labels: vec!["educational".to_string(), "distracting".to_string()],
                hypothesis_template: hypothesis.to_string(),
                multi_label: false,
            },
        };

        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(provider = %Provider::HuggingFace, error = %e, "inference request failed");
                ClassifyError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(provider = %Provider::HuggingFace, status = %status, body = %body, "inference API error");
            return Err(ClassifyError::Provider {
                provider: Provider::HuggingFace,
                status: status.as_u16(),
                body,
            });
        }

        let inference: InferenceResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::Network(e.to_string()))?;

        Ok(decision_from_labels(&inference.labels))
    }
}

/// Top-ranked label wins; a missing label list fails open to show.
fn decision_from_labels(labels: &[String]) -> Decision {
    match labels.first().map(String::as_str) {
        Some("educational") | None => Decision::Show,
        Some(_) => Decision::Hide,
    }
}

#[async_trait]
impl TitleClassifier for ZeroShot {
    async fn classify(&self, titles: &[String], hints: &KeywordHints) -> Result<Vec<Decision>> {
        let start = std::time::Instant::now();
        let hypothesis = Self::hypothesis_template(hints);

        // One round trip per title, in order.
        let mut decisions = Vec::with_capacity(titles.len());
        for title in titles {
            decisions.push(self.classify_one(title, &hypothesis).await?);
        }

        debug!(
            provider = %Provider::HuggingFace,
            model = %self.model,
            titles = titles.len(),
            duration_ms = start.elapsed().as_millis(),
            "zero-shot classified"
        );

        Ok(decisions)
    }
}

// Request/Response types

#[derive(Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    candidate_labels: Vec<String>,
    hypothesis_template: String,
    multi_label: bool,
}

#[derive(Deserialize)]
struct InferenceResponse {
    #[serde(default)]
    labels: Vec<String>,
}
