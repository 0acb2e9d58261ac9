//! Analyzer facade: the one object the dashboard talks to
//!
//! Wires the model store, taxonomy, classifier cascade, and fallback
//! controller together. The store's cache is shared across every call, so a
//! channel-wide batch analysis loads each artifact at most once.

use crate::category::CategoryClassifier;
use crate::config::AnalyzerConfig;
use crate::fallback::FallbackController;
use crate::store::ModelStore;
use crate::taxonomy::CategoryTaxonomy;
use eduscope_core::{
    CategoryVerdict, EducationalEstimate, Result, TranscriptProvider, VerdictDisplay,
    VideoMetadataProvider,
};
use std::sync::Arc;
use tracing::info;

/// Entry point for per-video classification and educational-content
/// estimation.
pub struct VideoAnalyzer {
    store: Arc<ModelStore>,
    classifier: CategoryClassifier,
    controller: FallbackController,
    metadata: Arc<dyn VideoMetadataProvider>,
}

impl VideoAnalyzer {
    /// Wire an analyzer from its parts.
    pub fn new(
        store: Arc<ModelStore>,
        taxonomy: Arc<CategoryTaxonomy>,
        metadata: Arc<dyn VideoMetadataProvider>,
        transcripts: Arc<dyn TranscriptProvider>,
    ) -> Self {
        let classifier = CategoryClassifier::new(Arc::clone(&store), taxonomy);
        let controller =
            FallbackController::new(Arc::clone(&store), Arc::clone(&metadata), transcripts);
        Self {
            store,
            classifier,
            controller,
            metadata,
        }
    }

    /// Build an analyzer from configuration, loading the taxonomy from disk.
    pub fn from_config(
        config: &AnalyzerConfig,
        metadata: Arc<dyn VideoMetadataProvider>,
        transcripts: Arc<dyn TranscriptProvider>,
    ) -> Result<Self> {
        let taxonomy = Arc::new(CategoryTaxonomy::from_file(&config.taxonomy)?);
        info!(
            models_dir = %config.models_dir.display(),
            categories = taxonomy.len(),
            "initializing video analyzer"
        );
        let store = Arc::new(ModelStore::new(config.models_dir.clone()));
        Ok(Self::new(store, taxonomy, metadata, transcripts))
    }

    /// Classify raw text through the category cascade.
    pub fn classify(&self, text: &str) -> Result<CategoryVerdict> {
        self.classifier.classify(text)
    }

    /// Presentation rendering of [`Self::classify`]; never fails.
    pub fn classify_display(&self, text: &str) -> VerdictDisplay {
        self.classifier.classify_display(text)
    }

    /// Classify a video by its fetched title and description.
    pub async fn classify_video(&self, video_id: &str) -> Result<CategoryVerdict> {
        self.classifier
            .classify_video(self.metadata.as_ref(), video_id)
            .await
    }

    /// Presentation rendering of [`Self::classify_video`]; never fails.
    pub async fn classify_video_display(&self, video_id: &str) -> VerdictDisplay {
        self.classifier
            .classify_video_display(self.metadata.as_ref(), video_id)
            .await
    }

    /// Estimate a video's educational content, degrading from transcript to
    /// title/description as needed. Always renderable.
    pub async fn educational_content(&self, video_id: &str) -> EducationalEstimate {
        self.controller.educational_content(video_id).await
    }

    /// The shared model store backing this analyzer.
    pub fn store(&self) -> &Arc<ModelStore> {
        &self.store
    }
}
