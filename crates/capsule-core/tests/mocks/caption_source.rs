use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use capsule_core::{CaptionSource, CaptionTrack, CapsuleError, RawCaptions};

#[derive(Clone, Default)]
pub struct MockCaptionSource {
    pub tracks: Vec<CaptionTrack>,
    pub renders: HashMap<String, String>,
    pub fail_with: Option<String>,
    pub fail_render: Option<String>,
    pub listed: Arc<Mutex<Vec<String>>>,
    pub rendered: Arc<Mutex<Vec<String>>>,
}

impl MockCaptionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a track whose rendering is `srt`.
    pub fn with_track(mut self, code: &str, srt: &str) -> Self {
        self.tracks.push(CaptionTrack::new(
            code,
            format!("Track {code}"),
            format!("https://example.test/timedtext?lang={code}"),
        ));
        self.renders.insert(code.to_string(), srt.to_string());
        self
    }

    /// Lists tracks normally but fails every rendering.
    pub fn fail_render(mut self, msg: &str) -> Self {
        self.fail_render = Some(msg.to_string());
        self
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl CaptionSource for MockCaptionSource {
    async fn list_caption_tracks(&self, video_url: &str) -> capsule_core::Result<Vec<CaptionTrack>> {
        self.listed.lock().unwrap().push(video_url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(CapsuleError::VideoUnavailable {
                video_id: "mock".into(),
                reason: msg.clone(),
            });
        }
        Ok(self.tracks.clone())
    }

    async fn render_track(&self, track: &CaptionTrack) -> capsule_core::Result<RawCaptions> {
        self.rendered.lock().unwrap().push(track.code.clone());
        if let Some(ref msg) = self.fail_render {
            return Err(CapsuleError::Api {
                status: 404,
                message: msg.clone(),
            });
        }
        Ok(RawCaptions::new(
            self.renders.get(&track.code).cloned().unwrap_or_default(),
        ))
    }
}
