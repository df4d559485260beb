//! Multi-Provider AI Title Classification Core
//!
//! Classifies video titles as `show` or `hide` by dispatching to one of
//! six external AI text-classification APIs and parsing the free-text
//! model output into per-title decisions.
//!
//! # Design Philosophy
//!
//! **Fail open.** Any uncertainty or failure anywhere in the pipeline
//! resolves to leaving content visible, never hiding it. The handler
//! converts every error into a structurally valid response with one
//! `show` decision per input title.
//!
//! The DOM scraper, the settings UI, and the storage backend live on the
//! host platform; this crate talks to them through narrow interfaces
//! ([`SettingsStore`], [`ClassificationRequest`], [`ClassifyResponse`])
//! and owns only the classification chain itself.
//!
//! # Usage
//!
//! ```rust,ignore
//! use classifier::{handle_classification, ClassificationRequest, KeywordHints};
//!
//! let request = ClassificationRequest::new(
//!     ["Python Tutorial for Beginners", "INSANE Prank Gone Wrong!!"],
//!     KeywordHints::new(["tutorial", "learn"], ["prank", "clickbait"]),
//! );
//!
//! // `store` is the host platform's settings store
//! let response = handle_classification(&request, &store).await;
//! for (title, decision) in request.titles.iter().zip(&response.decisions) {
//!     println!("{} -> {}", title, decision);
//! }
//! ```
//!
//! # Modules
//!
//! - [`sanitize`] - Latin-1 validation, header-safe and title cleaning
//! - [`prompt`] - deterministic instruction building
//! - [`parse`] - free-text model output to decisions
//! - [`providers`] - the six provider adapters behind [`TitleClassifier`]
//! - [`dispatch`] - adapter selection by [`Provider`]
//! - [`handler`] - validation, dispatch, fail-open reply
//! - [`settings`] - configuration snapshot and store collaborator
//! - [`testing`] - mock implementations for callers' tests

pub mod dispatch;
pub mod error;
pub mod handler;
pub mod parse;
pub mod prompt;
pub mod providers;
pub mod sanitize;
pub mod security;
pub mod settings;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use dispatch::classifier_for;
pub use error::{ClassifyError, Result};
pub use handler::{handle_classification, respond_with};
pub use parse::parse_decisions;
pub use prompt::build_prompt;
pub use providers::{ChatCompletions, Gemini, TitleClassifier, WorkersAi, ZeroShot};
pub use sanitize::{clean_title, header_safe, is_latin1};
pub use security::SecretString;
pub use settings::{Provider, Settings, SettingsStore};
pub use types::{ClassificationRequest, ClassifyResponse, Decision, KeywordHints};
