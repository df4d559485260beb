//! Integration tests for the fail-open handler contract.
//!
//! The central safety property: whatever goes wrong, the caller gets a
//! structurally valid response with one decision per input title, and on
//! failure every decision is `show`.

use classifier::testing::{MockClassifier, MockSettingsStore};
use classifier::{
    handle_classification, respond_with, ClassificationRequest, ClassifyResponse, Decision,
    KeywordHints, Provider, Settings,
};

fn request(titles: &[&str]) -> ClassificationRequest {
    ClassificationRequest::new(titles.to_vec(), KeywordHints::default())
}

#[tokio::test]
async fn decisions_length_matches_titles_on_every_failure_path() {
    let stores = [
        MockSettingsStore::new(Settings::default()),
        MockSettingsStore::new(Settings::default().with_credential("abc\u{20ac}def")),
        MockSettingsStore::new(
            Settings::default()
                .with_credential("key")
                .with_provider("not-a-provider"),
        ),
        MockSettingsStore::failing("storage down"),
    ];

    for store in &stores {
        for count in 0..5 {
            let titles: Vec<String> = (0..count).map(|i| format!("title {i}")).collect();
            let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
            let response = handle_classification(&request(&title_refs), store).await;

            assert!(!response.success);
            assert_eq!(response.decisions.len(), count);
            assert!(response.decisions.iter().all(|d| *d == Decision::Show));
            assert!(response.error.is_some());
        }
    }
}

#[tokio::test]
async fn no_credential_two_title_reply_shape() {
    let store = MockSettingsStore::new(Settings::default());
    let response = handle_classification(&request(&["a", "b"]), &store).await;

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "success": false,
            "error": "No API key configured",
            "decisions": ["show", "show"]
        })
    );
}

#[tokio::test]
async fn mocked_provider_text_maps_positionally() {
    let classifier = MockClassifier::with_response("EDUCATIONAL\nDISTRACTING");
    let req = request(&["Python Tutorial for Beginners", "INSANE Prank Gone Wrong!!"]);

    let decisions = respond_with(&classifier, &req.titles, &req).await.unwrap();
    assert_eq!(decisions, vec![Decision::Show, Decision::Hide]);
    assert_eq!(classifier.call_count(), 1);

    let json = serde_json::to_value(ClassifyResponse::ok(decisions)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "success": true, "decisions": ["show", "hide"] })
    );
}

#[tokio::test]
async fn unknown_provider_never_reaches_a_classifier() {
    let store = MockSettingsStore::new(
        Settings::default()
            .with_credential("key")
            .with_provider("openai"),
    );
    let response = handle_classification(&request(&["a"]), &store).await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Unknown provider: openai"));
    // Every known identifier still resolves.
    for provider in Provider::ALL {
        assert_eq!(Provider::from_name(provider.name()), Some(provider));
    }
}
