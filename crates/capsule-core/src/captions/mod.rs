pub mod youtube;

use std::future::Future;

use crate::{
    error::Result,
    types::{CaptionTrack, RawCaptions},
};

/// Manually authored English.
pub const ENGLISH: &str = "en";
/// Auto-generated English.
pub const AUTO_ENGLISH: &str = "a.en";

/// A service that knows which caption tracks a video has and how to render them.
pub trait CaptionSource {
    fn list_caption_tracks(
        &self,
        video_url: &str,
    ) -> impl Future<Output = Result<Vec<CaptionTrack>>> + Send;

    fn render_track(&self, track: &CaptionTrack)
    -> impl Future<Output = Result<RawCaptions>> + Send;
}

impl<T: CaptionSource + Sync> CaptionSource for &T {
    async fn list_caption_tracks(&self, video_url: &str) -> Result<Vec<CaptionTrack>> {
        (**self).list_caption_tracks(video_url).await
    }

    async fn render_track(&self, track: &CaptionTrack) -> Result<RawCaptions> {
        (**self).render_track(track).await
    }
}

/// Picks manual English first, then auto-generated English.
pub fn select_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.code == ENGLISH)
        .or_else(|| tracks.iter().find(|t| t.code == AUTO_ENGLISH))
}

/// Fetches the English captions of a single video.
pub struct CaptionFetcher<S> {
    source: S,
}

impl<S: CaptionSource> CaptionFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the SRT rendering of the preferred English track, or `None` when the
    /// video has no English captions or the caption service failed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch(&self, video_url: &str) -> Option<RawCaptions> {
        tracing::info!("Fetching captions for video: {video_url}");

        let tracks = match self.source.list_caption_tracks(video_url).await {
            Ok(tracks) => tracks,
            Err(e) => {
                tracing::warn!("Error fetching captions: {e}");
                return None;
            }
        };

        tracing::info!("Available captions:");
        for track in &tracks {
            tracing::info!("- {}: {}", track.code, track.name);
        }

        let Some(track) = select_track(&tracks) else {
            tracing::info!("No standard or auto-generated English captions available.");
            return None;
        };

        if track.is_auto_generated() {
            tracing::info!("Fetching auto-generated English captions...");
        } else {
            tracing::info!("Fetching standard English captions...");
        }

        match self.source.render_track(track).await {
            Ok(captions) if !captions.trim().is_empty() => {
                tracing::info!("Captions fetched successfully.");
                Some(captions)
            }
            Ok(_) => {
                tracing::info!("No English captions available.");
                None
            }
            Err(e) => {
                tracing::warn!("Error fetching captions: {e}");
                None
            }
        }
    }
}
