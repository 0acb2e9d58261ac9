//! Shared fixtures for unit tests: on-disk artifact stores and canned
//! providers.

use crate::artifact::ClassifierArtifact;
use crate::store::ModelStore;
use async_trait::async_trait;
use eduscope_core::{
    Error, Result, TranscriptProvider, TranscriptSegment, VideoMetadata, VideoMetadataProvider,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Write the given artifacts into a fresh temp directory and open a store
/// over it. The directory is kept for the life of the test process.
pub fn fixture_store<F>(artifacts: F) -> Arc<ModelStore>
where
    F: FnOnce(&Path) -> Vec<(String, ClassifierArtifact)>,
{
    let dir: &'static tempfile::TempDir = Box::leak(Box::new(tempfile::tempdir().unwrap()));
    for (name, artifact) in artifacts(dir.path()) {
        let json = serde_json::to_string(&artifact).unwrap();
        std::fs::write(dir.path().join(format!("{name}.json")), json).unwrap();
    }
    Arc::new(ModelStore::new(dir.path()))
}

/// A binary educational model over a small fixed vocabulary:
/// "calculus" and "lesson" vote educational, "subscribe" and "like" vote
/// non-educational.
pub fn binary_fixture_model() -> ClassifierArtifact {
    ClassifierArtifact::new(
        [
            ("calculus".to_string(), 0),
            ("lesson".to_string(), 1),
            ("subscribe".to_string(), 2),
            ("like".to_string(), 3),
        ]
        .into_iter()
        .collect(),
        vec![1.0; 4],
        vec![vec![-2.0, -2.0, 2.0, 2.0]],
        vec![0.0],
    )
    .unwrap()
}

/// Canned metadata/transcript provider with call counters.
///
/// `None` for either source means that fetch fails with an upstream error,
/// which is how tests drive the fallback paths.
pub struct FixtureProvider {
    metadata: Option<VideoMetadata>,
    segments: Option<Vec<TranscriptSegment>>,
    metadata_calls: AtomicU64,
    transcript_calls: AtomicU64,
}

impl FixtureProvider {
    pub fn new(
        metadata: Option<VideoMetadata>,
        segments: Option<Vec<TranscriptSegment>>,
    ) -> Self {
        Self {
            metadata,
            segments,
            metadata_calls: AtomicU64::new(0),
            transcript_calls: AtomicU64::new(0),
        }
    }

    /// Both fetches fail.
    pub fn failing() -> Self {
        Self::new(None, None)
    }

    /// Metadata succeeds, transcript fetch fails.
    pub fn with_metadata(metadata: VideoMetadata) -> Self {
        Self::new(Some(metadata), None)
    }

    /// Transcript succeeds, metadata fetch fails.
    pub fn with_transcript(segments: Vec<TranscriptSegment>) -> Self {
        Self::new(None, Some(segments))
    }

    pub fn metadata_calls(&self) -> u64 {
        self.metadata_calls.load(Ordering::Relaxed)
    }

    pub fn transcript_calls(&self) -> u64 {
        self.transcript_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl VideoMetadataProvider for FixtureProvider {
    async fn video_metadata(&self, video_id: &str) -> Result<VideoMetadata> {
        self.metadata_calls.fetch_add(1, Ordering::Relaxed);
        self.metadata
            .clone()
            .ok_or_else(|| Error::upstream(format!("metadata unavailable for {video_id}")))
    }
}

#[async_trait]
impl TranscriptProvider for FixtureProvider {
    async fn transcript(&self, video_id: &str) -> Result<Vec<TranscriptSegment>> {
        self.transcript_calls.fetch_add(1, Ordering::Relaxed);
        self.segments
            .clone()
            .ok_or_else(|| Error::upstream(format!("transcripts disabled for {video_id}")))
    }
}
