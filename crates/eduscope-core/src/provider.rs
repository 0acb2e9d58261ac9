//! Provider traits for the external collaborators that feed the pipeline
//!
//! Scraping and networking live outside the core; the classifiers see them
//! only through these traits. Implementations are expected to be cheap to
//! share (`Arc<dyn ...>`) and safe to call concurrently.

use crate::error::Result;
use crate::types::{TranscriptSegment, VideoMetadata};
use async_trait::async_trait;

/// Supplies title/description metadata for a video.
///
/// Any failure (invalid id, unreachable video) must surface as
/// [`crate::Error::Upstream`]; the pipeline treats it as fatal to the current
/// prediction attempt.
#[async_trait]
pub trait VideoMetadataProvider: Send + Sync {
    /// Fetch metadata for the given video id or URL
    async fn video_metadata(&self, video_id: &str) -> Result<VideoMetadata>;
}

/// Supplies the ordered transcript segments of a video.
///
/// Implementations must distinguish "the video has no usable transcript
/// segments" (return an empty `Vec`) from "the fetch itself failed" (return
/// `Err`): the former is a valid zero-signal outcome, the latter triggers the
/// title/description fallback.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the transcript segments for the given video id or URL
    async fn transcript(&self, video_id: &str) -> Result<Vec<TranscriptSegment>>;
}
