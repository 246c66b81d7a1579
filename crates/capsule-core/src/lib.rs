//! Capsule Core Library
//!
//! Core functionality for fetching YouTube captions, stripping their SRT
//! formatting and summarizing the text with an AI provider.

pub mod captions;
pub mod clean;
pub mod config;
pub mod error;
pub mod format;
pub mod llm;
pub mod pipeline;
pub mod provider;
pub mod types;

// Re-export commonly used items at crate root
pub use captions::{CaptionFetcher, CaptionSource, select_track, youtube::YoutubeCaptions};
pub use clean::clean_captions;
pub use config::Config;
pub use error::{CapsuleError, Result};
pub use format::{format_srt, format_timestamp};
pub use llm::{
    chat::ChatCompletions,
    summarizer::{CompletionService, SUMMARY_PROMPT, Summarizer, summary_prompt},
};
pub use pipeline::{Outcome, Pipeline};
pub use provider::{Provider, ProviderConfig};
pub use types::{CaptionTrack, Cue, RawCaptions};
