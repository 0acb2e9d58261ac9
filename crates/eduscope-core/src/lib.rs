//! EduScope Core
//!
//! Core types, traits, and error handling shared across EduScope components.
//!
//! This crate provides:
//! - Common types for video text, transcript segments, and classification
//!   verdicts
//! - Error types and result handling
//! - Provider traits for the external metadata and transcript collaborators

pub mod error;
pub mod provider;
pub mod types;

pub use error::{Error, Result};
pub use provider::{TranscriptProvider, VideoMetadataProvider};
pub use types::{
    CategoryVerdict, EducationalEstimate, TranscriptSegment, VerdictDisplay, VideoMetadata,
    VideoText, STATUS_EDUCATIONAL, STATUS_NON_EDUCATIONAL,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::provider::{TranscriptProvider, VideoMetadataProvider};
    pub use crate::types::{
        CategoryVerdict, EducationalEstimate, TranscriptSegment, VerdictDisplay, VideoMetadata,
        VideoText,
    };
}
