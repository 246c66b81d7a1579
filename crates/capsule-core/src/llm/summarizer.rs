use std::future::Future;

use crate::error::Result;

pub const SUMMARY_PROMPT: &str = "Summarize the following text:\n\n";

/// A text-completion backend.
///
/// The API key travels with every call; implementations keep no credentials.
pub trait CompletionService {
    fn complete(&self, api_key: &str, prompt: &str) -> impl Future<Output = Result<String>> + Send;

    fn name(&self) -> &str {
        "completion service"
    }
}

impl<T: CompletionService + Sync> CompletionService for &T {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String> {
        (**self).complete(api_key, prompt).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub fn summary_prompt(text: &str) -> String {
    format!("{SUMMARY_PROMPT}{text}")
}

pub struct Summarizer<C> {
    service: C,
}

impl<C: CompletionService> Summarizer<C> {
    pub fn new(service: C) -> Self {
        Self { service }
    }

    /// Summarizes `text`, or returns `None` when no API key is configured, the
    /// service fails, or it answers with nothing.
    #[tracing::instrument(level = "debug", skip_all, fields(chars = text.len()))]
    pub async fn summarize(&self, text: &str, api_key: Option<&str>) -> Option<String> {
        let Some(api_key) = api_key.map(str::trim).filter(|k| !k.is_empty()) else {
            tracing::warn!("No API key configured; skipping summarization.");
            return None;
        };

        tracing::info!("Summarizing with {}...", self.service.name());

        match self.service.complete(api_key, &summary_prompt(text)).await {
            Ok(summary) => {
                let summary = summary.trim();
                (!summary.is_empty()).then(|| summary.to_string())
            }
            Err(e) => {
                tracing::warn!("Error summarizing text: {e}");
                None
            }
        }
    }
}
