use std::ops::Deref;

/// A caption track offered for a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    /// Language code, prefixed with `a.` for auto-generated tracks (`en`, `a.en`).
    pub code: String,
    pub name: String,
    /// Opaque handle the caption source uses to render the track.
    pub base_url: String,
}

impl CaptionTrack {
    pub fn new(code: impl Into<String>, name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            base_url: base_url.into(),
        }
    }

    pub fn is_auto_generated(&self) -> bool {
        self.code.starts_with("a.")
    }
}

/// A single timed caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub start_ms: u64,
    pub end_ms: u64,
    pub text: String,
}

/// Caption text in SubRip (SRT) format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCaptions(String);

impl RawCaptions {
    pub fn new(srt: impl Into<String>) -> Self {
        Self(srt.into())
    }
}

impl Deref for RawCaptions {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
