//! Developer CLI for the classification core.
//!
//! Plays the role the browser content script plays in production: feeds a
//! batch of titles through the handler and prints the per-title decisions.
//!
//! ```text
//! EDU_FILTER_API_KEY=gsk_... edufilter --provider groq \
//!     --show tutorial --show learn --hide prank \
//!     "Python Tutorial for Beginners" "INSANE Prank Gone Wrong!!"
//! ```

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use classifier::{
    handle_classification, ClassificationRequest, KeywordHints, Provider, Settings, SettingsStore,
};

/// Classify video titles through a configured AI provider.
#[derive(Parser)]
#[command(name = "edufilter", version, about)]
struct Args {
    /// Provider identifier (groq, OpenRouter, gemini, Hugging Face,
    /// Mistral AI, Cloudflare Workers AI)
    #[arg(short, long, default_value = "groq")]
    provider: String,

    /// Show-intent keyword hint (repeatable)
    #[arg(long = "show")]
    show_keywords: Vec<String>,

    /// Hide-intent keyword hint (repeatable)
    #[arg(long = "hide")]
    hide_keywords: Vec<String>,

    /// Titles to classify, in order
    #[arg(required = true)]
    titles: Vec<String>,
}

/// Settings snapshot backed by process environment variables.
///
/// The credential comes from `EDU_FILTER_API_KEY`; for Cloudflare it is the
/// combined `account:token` pair.
struct EnvSettingsStore {
    provider: String,
}

#[async_trait]
impl SettingsStore for EnvSettingsStore {
    async fn load(&self) -> classifier::Result<Settings> {
        let mut settings = Settings::default().with_provider(self.provider.clone());
        if let Ok(key) = std::env::var("EDU_FILTER_API_KEY") {
            settings = settings.with_credential(key);
        }
        Ok(settings)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    if Provider::from_name(&args.provider).is_none() {
        let known: Vec<&str> = Provider::ALL.iter().map(|p| p.name()).collect();
        anyhow::bail!(
            "unknown provider {:?}; known providers: {}",
            args.provider,
            known.join(", ")
        );
    }

    let request = ClassificationRequest::new(
        args.titles.clone(),
        KeywordHints::new(args.show_keywords, args.hide_keywords),
    );

    let store = EnvSettingsStore {
        provider: args.provider,
    };
    let response = handle_classification(&request, &store).await;

    for (title, decision) in args.titles.iter().zip(&response.decisions) {
        println!("{decision}\t{title}");
    }

    if !response.success {
        anyhow::bail!(
            "classification failed: {}",
            response.error.unwrap_or_else(|| "unknown error".into())
        );
    }
    Ok(())
}
