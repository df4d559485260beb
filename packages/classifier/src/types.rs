//! Request and response shapes for one classification cycle.
//!
//! Everything here is transient and request-scoped; nothing outlives a
//! single classify call except the settings snapshot taken at its start.

use serde::{Deserialize, Serialize};

/// Binary classification outcome for one title.
///
/// The fallback on any uncertainty or failure is always `Show` (fail open):
/// a classification failure must never cause content to be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Show,
    Hide,
}

impl Decision {
    /// Wire string for this decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Show => "show",
            Decision::Hide => "hide",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-supplied keyword hints embedded in prompts to bias the model.
///
/// These guide the external classifier; they are never enforced locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordHints {
    /// Keywords signalling show-intent (educational content)
    #[serde(default)]
    pub show: Vec<String>,

    /// Keywords signalling hide-intent (distracting content)
    #[serde(default)]
    pub hide: Vec<String>,
}

impl KeywordHints {
    /// Create hints from show/hide keyword lists.
    pub fn new(
        show: impl IntoIterator<Item = impl Into<String>>,
        hide: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            show: show.into_iter().map(Into::into).collect(),
            hide: hide.into_iter().map(Into::into).collect(),
        }
    }
}

/// One classification request from the content collaborator.
///
/// Title order is preserved end-to-end: the Nth output decision always
/// corresponds to the Nth input title.
#[derive(Debug, Clone, Default)]
pub struct ClassificationRequest {
    /// Raw extracted titles, in feed order
    pub titles: Vec<String>,

    /// Keyword guidance for the model
    pub hints: KeywordHints,
}

impl ClassificationRequest {
    /// Create a request from raw titles and hints.
    pub fn new(titles: impl IntoIterator<Item = impl Into<String>>, hints: KeywordHints) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            hints,
        }
    }
}

/// Uniform reply to the content collaborator.
///
/// Structurally valid on every path: `decisions` always has one entry per
/// input title, and every entry defaults to `show` when anything failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Whether classification ran to completion
    pub success: bool,

    /// Human-readable failure message, for logging only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// One decision per input title, in input order
    pub decisions: Vec<Decision>,
}

impl ClassifyResponse {
    /// Successful response carrying real decisions.
    pub fn ok(decisions: Vec<Decision>) -> Self {
        Self {
            success: true,
            error: None,
            decisions,
        }
    }

    /// Fail-open response: every title defaults to `show`.
    pub fn fail_open(message: impl Into<String>, title_count: usize) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            decisions: vec![Decision::Show; title_count],
        }
    }
}
