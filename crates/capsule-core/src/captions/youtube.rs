use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::{
    captions::CaptionSource,
    error::{CapsuleError, Result},
    format::format_srt,
    types::{CaptionTrack, Cue, RawCaptions},
};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Caption tracks from YouTube's innertube player endpoint, rendered from the
/// `json3` timed-text format into SRT.
pub struct YoutubeCaptions {
    client: Client,
    base_url: String,
}

impl YoutubeCaptions {
    const BASE_URL: &str = "https://www.youtube.com";
    const CLIENT_NAME: &str = "WEB";
    const CLIENT_VERSION: &str = "2.20250626.01.00";

    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: Self::BASE_URL.into(),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn fetch_player(&self, video_id: &str) -> Result<PlayerResponse> {
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": Self::CLIENT_NAME,
                    "clientVersion": Self::CLIENT_VERSION,
                    "hl": "en"
                }
            },
            "videoId": video_id
        });

        let resp = self
            .client
            .post(format!("{}/youtubei/v1/player", self.base_url))
            .query(&[("prettyPrint", "false")])
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::debug!(error = %e, "Player request failed"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(CapsuleError::Api { status, message });
        }

        Ok(resp.json::<PlayerResponse>().await?)
    }

    /// Resolves a track handle against the base URL and forces the `json3` format.
    fn timed_text_url(&self, track: &CaptionTrack) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?.join(&track.base_url)?;

        let params: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "fmt")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(params)
            .append_pair("fmt", "json3");

        Ok(url)
    }
}

impl CaptionSource for YoutubeCaptions {
    async fn list_caption_tracks(&self, video_url: &str) -> Result<Vec<CaptionTrack>> {
        let video_id = video_id(video_url)?;
        tracing::debug!(%video_id, "Looking up caption tracks");

        let player = self.fetch_player(&video_id).await?;

        if let Some(status) = player.playability_status.filter(|s| s.status != "OK") {
            return Err(CapsuleError::VideoUnavailable {
                video_id,
                reason: status.reason.unwrap_or(status.status),
            });
        }

        let tracks = player
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .map(|r| r.caption_tracks)
            .unwrap_or_default()
            .into_iter()
            .map(CaptionTrack::from)
            .collect();

        Ok(tracks)
    }

    async fn render_track(&self, track: &CaptionTrack) -> Result<RawCaptions> {
        let url = self.timed_text_url(track)?;
        tracing::debug!(code = %track.code, "Downloading timed text");

        let resp = self
            .client
            .get(url)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(CapsuleError::Api { status, message });
        }

        let timed_text = resp.json::<TimedText>().await?;
        Ok(format_srt(&timed_text.into_cues()))
    }
}

/// Extracts the video id from the URL forms YouTube links come in.
pub fn video_id(video_url: &str) -> Result<String> {
    let invalid = || CapsuleError::InvalidVideoUrl {
        url: video_url.to_string(),
    };

    let trimmed = video_url.trim();
    let url = Url::parse(trimmed)
        .or_else(|e| {
            if trimmed.contains("://") {
                Err(e)
            } else {
                Url::parse(&format!("https://{trimmed}"))
            }
        })
        .map_err(|_| invalid())?;
    let host = url.host_str().ok_or_else(invalid)?.to_ascii_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .or_else(|| host.strip_prefix("music."))
        .unwrap_or(&host);

    let mut segments = url.path_segments().into_iter().flatten();

    let id = match host {
        "youtu.be" => segments.next().map(str::to_string),
        "youtube.com" | "youtube-nocookie.com" => match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            Some("shorts" | "embed" | "live" | "v") => segments.next().map(str::to_string),
            _ => None,
        },
        _ => None,
    };

    id.filter(|id| is_video_id(id)).ok_or_else(invalid)
}

fn is_video_id(id: &str) -> bool {
    id.len() == 11
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    playability_status: Option<PlayabilityStatus>,
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
struct PlayabilityStatus {
    status: String,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<PlayerCaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerCaptionTrack {
    base_url: String,
    language_code: String,
    kind: Option<String>,
    name: Option<TrackName>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackName {
    simple_text: Option<String>,
    #[serde(default)]
    runs: Vec<TextRun>,
}

#[derive(Debug, Deserialize)]
struct TextRun {
    text: String,
}

impl From<PlayerCaptionTrack> for CaptionTrack {
    fn from(track: PlayerCaptionTrack) -> Self {
        let code = match track.kind.as_deref() {
            Some("asr") => format!("a.{}", track.language_code),
            _ => track.language_code,
        };
        let name = track
            .name
            .and_then(|n| {
                n.simple_text.or_else(|| {
                    (!n.runs.is_empty()).then(|| n.runs.into_iter().map(|r| r.text).collect())
                })
            })
            .unwrap_or_else(|| code.clone());

        CaptionTrack {
            code,
            name,
            base_url: track.base_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedTextEvent {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    segs: Option<Vec<TimedTextSegment>>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSegment {
    #[serde(default)]
    utf8: String,
}

impl TimedText {
    /// Events without visible text (window setup, line appends) are dropped.
    fn into_cues(self) -> Vec<Cue> {
        self.events
            .into_iter()
            .filter_map(|event| {
                let text: String = event.segs?.into_iter().map(|s| s.utf8).collect();
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                Some(Cue {
                    start_ms: event.t_start_ms,
                    end_ms: event.t_start_ms.saturating_add(event.d_duration_ms),
                    text: text.to_string(),
                })
            })
            .collect()
    }
}
