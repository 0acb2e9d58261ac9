//! EduScope Classifiers
//!
//! The inference core of the EduScope dashboard: a classifier cascade that
//! decides whether a YouTube video is educational, assigns a category and a
//! subcategory probability distribution, and estimates how much of the
//! transcript is educational.
//!
//! Artifacts are loaded lazily through a process-wide [`store::ModelStore`]
//! and cached for the life of the process. The cascade short-circuits on
//! non-educational text, and the subcategory artifact is chosen dynamically
//! from the predicted category name.

pub mod analyzer;
pub mod artifact;
pub mod category;
pub mod config;
pub mod fallback;
pub mod store;
pub mod taxonomy;
pub mod transcript;

#[cfg(test)]
pub(crate) mod testutil;

pub use analyzer::VideoAnalyzer;
pub use artifact::{ClassifierArtifact, LABEL_EDUCATIONAL, LABEL_NON_EDUCATIONAL};
pub use category::{CategoryClassifier, UPSTREAM_FAILURE_STATUS};
pub use config::AnalyzerConfig;
pub use fallback::FallbackController;
pub use store::{ModelStore, CATEGORY_MODEL, EDUCATIONAL_MODEL};
pub use taxonomy::{artifact_slug, subcategory_model_name, CategoryTaxonomy};
pub use transcript::{TranscriptAggregator, TranscriptEstimate};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analyzer::VideoAnalyzer;
    pub use crate::artifact::ClassifierArtifact;
    pub use crate::category::CategoryClassifier;
    pub use crate::config::AnalyzerConfig;
    pub use crate::fallback::FallbackController;
    pub use crate::store::ModelStore;
    pub use crate::taxonomy::CategoryTaxonomy;
    pub use crate::transcript::{TranscriptAggregator, TranscriptEstimate};
    pub use eduscope_core::prelude::*;
}
