use thiserror::Error;

#[derive(Error, Debug)]
pub enum CapsuleError {
    #[error("Not a YouTube video URL: {url}")]
    InvalidVideoUrl { url: String },

    #[error("Video {video_id} is unavailable: {reason}")]
    VideoUnavailable { video_id: String, reason: String },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Completion response contained no text")]
    EmptyCompletion,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CapsuleError>;
