//! Category classifier cascade
//!
//! Three-tier verdict for a text input: educational or not, then a single
//! best category, then a probability distribution over that category's
//! subcategories. The subcategory model is chosen dynamically from the
//! predicted category name, so it cannot be loaded ahead of time.

use crate::artifact::LABEL_EDUCATIONAL;
use crate::store::{ModelStore, CATEGORY_MODEL, EDUCATIONAL_MODEL};
use crate::taxonomy::{subcategory_model_name, CategoryTaxonomy};
use eduscope_core::{
    CategoryVerdict, Error, Result, VerdictDisplay, VideoMetadataProvider,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Placeholder status shown when the video's metadata could not be fetched.
pub const UPSTREAM_FAILURE_STATUS: &str =
    "There must be an error in getting the title and description of the video.";

/// The educational/category/subcategory classifier cascade.
pub struct CategoryClassifier {
    store: Arc<ModelStore>,
    taxonomy: Arc<CategoryTaxonomy>,
}

impl CategoryClassifier {
    /// Create a cascade over a model store and taxonomy.
    pub fn new(store: Arc<ModelStore>, taxonomy: Arc<CategoryTaxonomy>) -> Self {
        Self { store, taxonomy }
    }

    /// Classify a text input through the full cascade.
    ///
    /// Non-educational text short-circuits after the binary model; the
    /// category and subcategory models are never loaded or run for it.
    pub fn classify(&self, text: &str) -> Result<CategoryVerdict> {
        let binary = self.store.load(EDUCATIONAL_MODEL)?;
        if binary.predict(text) != LABEL_EDUCATIONAL {
            debug!("binary model rejected text as non-educational");
            return Ok(CategoryVerdict::NonEducational);
        }

        let category_model = self.store.load(CATEGORY_MODEL)?;
        let label = category_model.predict(text);
        let category = self
            .taxonomy
            .category_at(label)
            .ok_or_else(|| {
                Error::internal(format!(
                    "category label {label} is outside the taxonomy ({} categories)",
                    self.taxonomy.len()
                ))
            })?
            .to_string();
        debug!(category = %category, "category model resolved label {label}");

        // Dynamic dispatch by predicted value: the artifact name is derived
        // from the category the previous stage just chose.
        let subcategory_model = self.store.load(&subcategory_model_name(&category))?;
        let subcategory_scores: Vec<f32> = subcategory_model
            .predict_proba(text)
            .into_iter()
            .map(|p| p * 100.0)
            .collect();

        let subcategories: Vec<String> = self
            .taxonomy
            .subcategories(&category)
            .unwrap_or_default()
            .into_iter()
            .map(str::to_string)
            .collect();
        if subcategories.len() != subcategory_scores.len() {
            return Err(Error::internal(format!(
                "subcategory model for '{category}' produced {} scores for {} subcategories",
                subcategory_scores.len(),
                subcategories.len()
            )));
        }

        Ok(CategoryVerdict::Educational {
            category,
            subcategories,
            subcategory_scores,
        })
    }

    /// Classify a video by its fetched title and description.
    pub async fn classify_video(
        &self,
        provider: &dyn VideoMetadataProvider,
        video_id: &str,
    ) -> Result<CategoryVerdict> {
        let metadata = provider.video_metadata(video_id).await?;
        self.classify(&metadata.text().combined())
    }

    /// Presentation path: never fails, rendering any internal error as a
    /// placeholder status with empty collections.
    pub fn classify_display(&self, text: &str) -> VerdictDisplay {
        match self.classify(text) {
            Ok(verdict) => verdict.into(),
            Err(err) => Self::render_failure(err),
        }
    }

    /// Presentation path for a whole video; upstream metadata failures are
    /// folded into the same placeholder rendering.
    pub async fn classify_video_display(
        &self,
        provider: &dyn VideoMetadataProvider,
        video_id: &str,
    ) -> VerdictDisplay {
        match self.classify_video(provider, video_id).await {
            Ok(verdict) => verdict.into(),
            Err(err) => Self::render_failure(err),
        }
    }

    fn render_failure(err: Error) -> VerdictDisplay {
        warn!(error = %err, "classification degraded to placeholder verdict");
        if err.is_upstream() {
            VerdictDisplay::failure(UPSTREAM_FAILURE_STATUS)
        } else {
            VerdictDisplay::failure(err.to_string())
        }
    }
}
