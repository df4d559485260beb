//! Google generative-content adapter.
//!
//! Differs from the chat-completions shape in three ways: the credential
//! travels as a URL query parameter instead of a header, the instruction
//! and title list are concatenated into a single user-role text block, and
//! a structurally incomplete success response (no candidate, no content
//! parts) degrades to all-show with a warning instead of failing.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClassifyError, Result};
use crate::parse::parse_decisions;
use crate::prompt::{keyword_list, numbered_titles};
use crate::providers::TitleClassifier;
use crate::settings::Provider;
use crate::types::{Decision, KeywordHints};

/// Gemini generateContent adapter.
#[derive(Clone)]
pub struct Gemini {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl Gemini {
    /// Create a new Gemini adapter with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            // alias stays current
            model: "gemini-2.0-flash".to_string(),
        }
    }

    /// Set a custom base URL (for proxies, local stand-ins).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn combined_text(titles: &[String], hints: &KeywordHints) -> String {
        let instruction = format!(
            "You classify YouTube video titles strictly as EDUCATIONAL or DISTRACTING.\n\
             SHOW (educational) keywords: {}\n\
             HIDE (distracting) keywords: {}\n\
             Rules:\n\
             1. Output exactly one word per line, in order: EDUCATIONAL or DISTRACTING.\n\
             2. EDUCATIONAL if it helps learning, tech, tutorials, programming, study, factual deep explanation.\n\
             3. DISTRACTING if it is entertainment, pranks, vlogs, clickbait, gossip, drama, reaction, compilation.\n\
             4. No extra commentary.",
            keyword_list(&hints.show),
            keyword_list(&hints.hide),
        );
        format!(
            "{}\n\nTitles:\n{}\nAnswer:",
            instruction,
            numbered_titles(titles)
        )
    }
}

#[async_trait]
impl TitleClassifier for Gemini {
    async fn classify(&self, titles: &[String], hints: &KeywordHints) -> Result<Vec<Decision>> {
        let start = std::time::Instant::now();

        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: Self::combined_text(titles, hints),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.2,
                max_output_tokens: 256,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key; drop it before the
                // error can reach logs or the caller-visible message.
                let e = e.without_url();
                warn!(provider = %Provider::Gemini, error = %e, "generateContent request failed");
                ClassifyError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(provider = %Provider::Gemini, status = %status, body = %body, "generateContent API error");
            return Err(ClassifyError::Provider {
                provider: Provider::Gemini,
                status: status.as_u16(),
                body,
            });
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::Network(e.without_url().to_string()))?;

        // Soft failure: an empty/incomplete candidate never hides content.
        let Some(raw) = extract_text(generate_response) else {
            warn!(provider = %Provider::Gemini, titles = titles.len(), "empty generateContent response, showing all");
            return Ok(vec![Decision::Show; titles.len()]);
        };

        debug!(
            provider = %Provider::Gemini,
            model = %self.model,
            titles = titles.len(),
            duration_ms = start.elapsed().as_millis(),
            "generateContent classified"
        );

        Ok(parse_decisions(&raw, titles.len()))
    }
}

/// Pull the candidate text out of a generateContent response, if present.
///
/// Returns `None` when the response has no candidate, no content, or no
/// parts; part texts are joined with newlines.
fn extract_text(response: GenerateResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().flatten().next()?;
    let parts = candidate.content?.parts?;
    Some(
        parts
            .into_iter()
            .map(|p| p.text.unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

// Request/Response types

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
