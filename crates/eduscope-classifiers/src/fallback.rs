//! Fallback controller: transcript first, title/description second
//!
//! Per-video degradation path with no persisted state across calls. The
//! transcript path is tried first; the metadata path is entered only when
//! fetching or classifying the transcript fails. An empty transcript is a
//! terminal no-data outcome, not a trigger for the fallback.

use crate::artifact::LABEL_EDUCATIONAL;
use crate::store::{ModelStore, EDUCATIONAL_MODEL};
use crate::transcript::{TranscriptAggregator, TranscriptEstimate};
use eduscope_core::{
    EducationalEstimate, Result, TranscriptProvider, VideoMetadataProvider,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Decides which data source backs a video's educational-percentage estimate.
pub struct FallbackController {
    store: Arc<ModelStore>,
    aggregator: TranscriptAggregator,
    metadata: Arc<dyn VideoMetadataProvider>,
    transcripts: Arc<dyn TranscriptProvider>,
}

impl FallbackController {
    /// Create a controller over a model store and the two upstream providers.
    pub fn new(
        store: Arc<ModelStore>,
        metadata: Arc<dyn VideoMetadataProvider>,
        transcripts: Arc<dyn TranscriptProvider>,
    ) -> Self {
        let aggregator = TranscriptAggregator::new(Arc::clone(&store));
        Self {
            store,
            aggregator,
            metadata,
            transcripts,
        }
    }

    /// Estimate how educational a video is, degrading gracefully.
    ///
    /// Always returns a renderable value; after both the transcript and the
    /// metadata path fail the result is [`EducationalEstimate::AnalysisError`].
    pub async fn educational_content(&self, video_id: &str) -> EducationalEstimate {
        match self.transcript_path(video_id).await {
            Ok(estimate) => estimate,
            Err(err) => {
                warn!(video_id, error = %err, "transcript path failed, falling back to metadata");
                match self.metadata_path(video_id).await {
                    Ok(estimate) => estimate,
                    Err(err) => {
                        warn!(video_id, error = %err, "metadata path failed, no further fallback");
                        EducationalEstimate::AnalysisError
                    }
                }
            }
        }
    }

    async fn transcript_path(&self, video_id: &str) -> Result<EducationalEstimate> {
        let segments = self.transcripts.transcript(video_id).await?;
        info!(video_id, segments = segments.len(), "analyzing transcript");
        match self.aggregator.educational_percentage(&segments)? {
            TranscriptEstimate::Percentage(pct) => Ok(EducationalEstimate::Percentage(pct)),
            TranscriptEstimate::NoData => Ok(EducationalEstimate::NoTranscript),
        }
    }

    /// Single binary prediction on title + description; the category and
    /// subcategory models are not involved on this path.
    async fn metadata_path(&self, video_id: &str) -> Result<EducationalEstimate> {
        let metadata = self.metadata.video_metadata(video_id).await?;
        let model = self.store.load(EDUCATIONAL_MODEL)?;
        let educational = model.predict(&metadata.text().combined()) == LABEL_EDUCATIONAL;
        Ok(EducationalEstimate::TitleDescriptionOnly { educational })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CATEGORY_MODEL;
    use crate::testutil::{binary_fixture_model, fixture_store, FixtureProvider};
    use eduscope_core::{TranscriptSegment, VideoMetadata};

    fn store() -> Arc<ModelStore> {
        fixture_store(|_| vec![(EDUCATIONAL_MODEL.to_string(), binary_fixture_model())])
    }

    fn controller(provider: FixtureProvider) -> (Arc<FixtureProvider>, FallbackController) {
        let provider = Arc::new(provider);
        let store = store();
        let controller = FallbackController::new(
            store,
            Arc::clone(&provider) as Arc<dyn VideoMetadataProvider>,
            Arc::clone(&provider) as Arc<dyn TranscriptProvider>,
        );
        (provider, controller)
    }

    #[tokio::test]
    async fn transcript_path_yields_percentage() {
        let segments = vec![
            TranscriptSegment::new("intro to calculus", 0.0, 5.0),
            TranscriptSegment::new("subscribe and like", 5.0, 5.0),
        ];
        let (provider, controller) = controller(FixtureProvider::with_transcript(segments));

        let estimate = controller.educational_content("vid1").await;
        assert_eq!(estimate, EducationalEstimate::Percentage(50.0));
        assert_eq!(
            estimate.summary(),
            "The 50.00% portion of this video is educational."
        );
        // Metadata was never consulted.
        assert_eq!(provider.metadata_calls(), 0);
    }

    #[tokio::test]
    async fn empty_transcript_is_terminal_no_data() {
        let (provider, controller) = controller(FixtureProvider::with_transcript(Vec::new()));

        let estimate = controller.educational_content("vid2").await;
        assert_eq!(estimate, EducationalEstimate::NoTranscript);
        // An empty transcript must NOT fall back to the metadata path.
        assert_eq!(provider.metadata_calls(), 0);
    }

    #[tokio::test]
    async fn transcript_failure_falls_back_to_metadata_once() {
        let (provider, controller) = controller(FixtureProvider::with_metadata(
            VideoMetadata::new("Calculus lesson", "a full calculus course"),
        ));

        let estimate = controller.educational_content("vid3").await;
        assert_eq!(
            estimate,
            EducationalEstimate::TitleDescriptionOnly { educational: true }
        );
        assert_eq!(provider.transcript_calls(), 1);
        assert_eq!(provider.metadata_calls(), 1);
    }

    #[tokio::test]
    async fn metadata_path_runs_binary_model_only() {
        let (_provider, controller) = controller(FixtureProvider::with_metadata(
            VideoMetadata::new("subscribe", "like and subscribe"),
        ));

        let estimate = controller.educational_content("vid4").await;
        assert_eq!(
            estimate,
            EducationalEstimate::TitleDescriptionOnly { educational: false }
        );
        // The full cascade never runs on the fallback path.
        assert!(!controller.store.is_cached(CATEGORY_MODEL));
        assert_eq!(controller.store.load_count(), 1);
    }

    #[tokio::test]
    async fn exhausted_fallbacks_yield_analysis_error() {
        let (provider, controller) = controller(FixtureProvider::failing());

        let estimate = controller.educational_content("vid5").await;
        assert_eq!(estimate, EducationalEstimate::AnalysisError);
        assert_eq!(provider.transcript_calls(), 1);
        assert_eq!(provider.metadata_calls(), 1);
        assert_eq!(
            estimate.summary(),
            "Error analyzing video. This may be because the video doesn't have transcripts available."
        );
    }

    #[tokio::test]
    async fn missing_model_during_aggregation_triggers_fallback() {
        // Store with no artifacts at all: the transcript path fails on the
        // model load, and so does the metadata path afterwards.
        let empty_store = fixture_store(|_| Vec::new());
        let provider = Arc::new(FixtureProvider::new(
            Some(VideoMetadata::new("Calculus", "lesson one")),
            Some(vec![TranscriptSegment::new("calculus", 0.0, 5.0)]),
        ));
        let controller = FallbackController::new(
            empty_store,
            Arc::clone(&provider) as Arc<dyn VideoMetadataProvider>,
            Arc::clone(&provider) as Arc<dyn TranscriptProvider>,
        );

        let estimate = controller.educational_content("vid6").await;
        assert_eq!(estimate, EducationalEstimate::AnalysisError);
        assert_eq!(provider.metadata_calls(), 1);
    }
}
