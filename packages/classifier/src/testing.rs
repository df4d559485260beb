//! Testing utilities including mock implementations.
//!
//! Useful for testing callers of the classification core without making
//! real provider or storage calls.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{ClassifyError, Result};
use crate::parse::parse_decisions;
use crate::providers::TitleClassifier;
use crate::settings::{Settings, SettingsStore};
use crate::types::{Decision, KeywordHints};

/// A mock settings store returning a canned snapshot or a canned failure.
pub struct MockSettingsStore {
    settings: Option<Settings>,
    failure: Option<String>,
}

impl MockSettingsStore {
    /// Store that always returns the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Some(settings),
            failure: None,
        }
    }

    /// Store that always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            settings: None,
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn load(&self) -> Result<Settings> {
        match (&self.settings, &self.failure) {
            (Some(settings), _) => Ok(settings.clone()),
            (None, Some(message)) => Err(ClassifyError::Settings(message.clone())),
            (None, None) => Ok(Settings::default()),
        }
    }
}

/// A mock classifier returning canned model output or a canned error.
///
/// Canned text runs through the real response parser, so tests exercise
/// the same text-to-decision path the provider adapters use. Calls are
/// counted for assertions.
#[derive(Default)]
pub struct MockClassifier {
    response_text: Option<String>,
    error: Option<String>,
    calls: AtomicUsize,
}

impl MockClassifier {
    /// Classifier whose provider "returns" the given raw text.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            response_text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Classifier that always fails, carrying the given error's message.
    pub fn failing(error: ClassifyError) -> Self {
        Self {
            error: Some(error.to_string()),
            response_text: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of classify calls made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TitleClassifier for MockClassifier {
    async fn classify(&self, titles: &[String], _hints: &KeywordHints) -> Result<Vec<Decision>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.error {
            return Err(ClassifyError::Network(message.clone()));
        }
        let text = self.response_text.as_deref().unwrap_or_default();
        Ok(parse_decisions(text, titles.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_classifier_parses_canned_text() {
        let mock = MockClassifier::with_response("DISTRACTING\nEDUCATIONAL");
        let titles = vec!["a".to_string(), "b".to_string()];
        let decisions = mock.classify(&titles, &KeywordHints::default()).await.unwrap();
        assert_eq!(decisions, vec![Decision::Hide, Decision::Show]);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_store_failure() {
        let store = MockSettingsStore::failing("down");
        assert!(store.load().await.is_err());
    }
}
