//! Request handler: validation, settings load, dispatch, fail-open reply.
//!
//! This is the error boundary of the core. Whatever happens inside a
//! request, the caller always receives a structurally valid response with
//! one decision per input title, and on any failure every decision is
//! `show`. Classification must never hide content by accident.

use tracing::error;

use crate::dispatch::classifier_for;
use crate::error::{ClassifyError, Result};
use crate::providers::TitleClassifier;
use crate::sanitize::{clean_title, is_latin1};
use crate::settings::{Provider, Settings, SettingsStore};
use crate::types::{ClassificationRequest, ClassifyResponse, Decision};

/// Handle one classification request end to end.
///
/// Loads a settings snapshot, validates the credential and provider,
/// sanitizes the titles, and dispatches to the selected adapter. Never
/// returns an error: every failure converts to a fail-open response whose
/// message is available to the caller for logging.
pub async fn handle_classification(
    request: &ClassificationRequest,
    store: &dyn SettingsStore,
) -> ClassifyResponse {
    let settings = match store.load().await {
        Ok(settings) => settings,
        Err(e) => return fail(e, request.titles.len()),
    };

    match classify(request, &settings).await {
        Ok(decisions) => ClassifyResponse::ok(decisions),
        Err(e) => fail(e, request.titles.len()),
    }
}

/// Validate settings and run the dispatch chain for one request.
async fn classify(request: &ClassificationRequest, settings: &Settings) -> Result<Vec<Decision>> {
    let credential = settings
        .credential
        .as_ref()
        .filter(|c| !c.expose().is_empty())
        .ok_or(ClassifyError::MissingCredential)?;

    if !is_latin1(credential.expose()) {
        return Err(ClassifyError::InvalidCredential);
    }

    let provider =
        Provider::from_name(&settings.provider).ok_or_else(|| ClassifyError::UnknownProvider {
            name: settings.provider.clone(),
        })?;

    let titles: Vec<String> = request.titles.iter().map(|t| clean_title(t)).collect();
    let classifier = classifier_for(provider, credential.expose());
    respond_with(classifier.as_ref(), &titles, request).await
}

/// Post-validation classification through any [`TitleClassifier`].
///
/// Separated from the dispatch chain so callers (and tests) can run the
/// ordering contract against a substitute classifier.
pub async fn respond_with(
    classifier: &dyn TitleClassifier,
    titles: &[String],
    request: &ClassificationRequest,
) -> Result<Vec<Decision>> {
    let decisions = classifier.classify(titles, &request.hints).await?;
    debug_assert_eq!(decisions.len(), request.titles.len());
    Ok(decisions)
}

fn fail(e: ClassifyError, title_count: usize) -> ClassifyResponse {
    error!(error = %e, titles = title_count, "classification failed, showing all titles");
    ClassifyResponse::fail_open(e.to_string(), title_count)
}
