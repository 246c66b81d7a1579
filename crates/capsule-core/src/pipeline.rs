use crate::{
    captions::{CaptionFetcher, CaptionSource},
    clean::clean_captions,
    config::Config,
    llm::summarizer::{CompletionService, Summarizer},
};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Summarized(String),
    MissingVideoUrl,
    NoCaptions,
    NoSummary,
}

impl Outcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Summarized(_) => 0,
            Outcome::MissingVideoUrl => 2,
            Outcome::NoCaptions => 3,
            Outcome::NoSummary => 4,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Summarized(summary) => format!("Summary: {summary}"),
            Outcome::MissingVideoUrl => "Video URL not found in config.".into(),
            Outcome::NoCaptions => "No captions were fetched.".into(),
            Outcome::NoSummary => "No summary was generated.".into(),
        }
    }
}

/// Fetch, clean and summarize the captions of the configured video.
pub struct Pipeline<S, C> {
    fetcher: CaptionFetcher<S>,
    summarizer: Summarizer<C>,
}

impl<S, C> Pipeline<S, C>
where
    S: CaptionSource,
    C: CompletionService,
{
    pub fn new(captions: S, completions: C) -> Self {
        Self {
            fetcher: CaptionFetcher::new(captions),
            summarizer: Summarizer::new(completions),
        }
    }

    pub async fn run(&self, config: &Config) -> Outcome {
        let Some(video_url) = config.video_url() else {
            return Outcome::MissingVideoUrl;
        };

        let Some(captions) = self.fetcher.fetch(video_url).await else {
            return Outcome::NoCaptions;
        };

        let text = clean_captions(&captions);
        tracing::debug!(raw = captions.len(), cleaned = text.len(), "Cleaned captions");

        match self.summarizer.summarize(&text, config.api_key()).await {
            Some(summary) => Outcome::Summarized(summary),
            None => Outcome::NoSummary,
        }
    }
}
