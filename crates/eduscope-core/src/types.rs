//! Core types for EduScope

use serde::{Deserialize, Serialize};

/// Display status used when a video is classified as educational.
pub const STATUS_EDUCATIONAL: &str = "Educational";

/// Display status used when a video is classified as non-educational.
pub const STATUS_NON_EDUCATIONAL: &str = "Non Educational";

/// Title and description of a video, the text fed to the classifier cascade.
///
/// Constructed per prediction call from provider metadata; immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoText {
    pub title: String,
    pub description: String,
}

impl VideoText {
    /// Create a new video text
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The single classifier input string: title and description joined by a
    /// space, matching how the models were trained.
    pub fn combined(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// Video metadata as returned by the metadata provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,

    /// YouTube's own category tag, if the provider exposes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_tag: Option<String>,

    /// Channel the video belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl VideoMetadata {
    /// Create metadata carrying only title and description
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category_tag: None,
            channel_id: None,
        }
    }

    /// Project the classifier-facing text out of the metadata
    pub fn text(&self) -> VideoText {
        VideoText::new(self.title.clone(), self.description.clone())
    }
}

/// One segment of a video transcript.
///
/// Segments are ordered by start time; one video maps to many segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Spoken text of the segment
    pub text: String,

    /// Offset from the start of the video, in seconds
    pub start_seconds: f64,

    /// Length of the segment, in seconds
    pub duration_seconds: f64,
}

impl TranscriptSegment {
    /// Create a new transcript segment
    pub fn new(text: impl Into<String>, start_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            text: text.into(),
            start_seconds,
            duration_seconds,
        }
    }
}

/// Structured result of the category classifier cascade for one text input.
///
/// The enum shape enforces the invariant that a non-educational verdict
/// carries no category or subcategory data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CategoryVerdict {
    /// The binary classifier rejected the text as non-educational;
    /// no category or subcategory model was run.
    NonEducational,

    /// The text is educational and was assigned a category.
    Educational {
        /// Best category, drawn from the taxonomy's key set
        category: String,

        /// Subcategories of `category`, sorted; aligned by index with
        /// `subcategory_scores`
        subcategories: Vec<String>,

        /// Per-subcategory probabilities scaled to 0-100. Independent
        /// one-vs-rest scores; not guaranteed to sum to 100.
        subcategory_scores: Vec<f32>,
    },
}

impl CategoryVerdict {
    /// Whether the verdict is educational
    pub fn is_educational(&self) -> bool {
        matches!(self, Self::Educational { .. })
    }

    /// The assigned category, if any
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Educational { category, .. } => Some(category),
            Self::NonEducational => None,
        }
    }
}

/// Presentation-facing rendering of a classification outcome.
///
/// Unlike [`CategoryVerdict`] this type is never absent: internal failures
/// are rendered as a human-readable placeholder in `status` with empty
/// collections, so a dashboard cell always has something to show. Callers
/// needing to detect failure check for a status that is neither
/// [`STATUS_EDUCATIONAL`] nor [`STATUS_NON_EDUCATIONAL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictDisplay {
    /// "Educational", "Non Educational", or an error placeholder
    pub status: String,

    /// Assigned category; empty when non-educational or failed
    pub category: String,

    /// Sorted subcategories of the assigned category
    pub subcategories: Vec<String>,

    /// Scores aligned with `subcategories`, scaled to 0-100
    pub subcategory_scores: Vec<f32>,
}

impl VerdictDisplay {
    /// Render a placeholder for a failed classification
    pub fn failure(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            category: String::new(),
            subcategories: Vec::new(),
            subcategory_scores: Vec::new(),
        }
    }

    /// Whether the status reflects a completed classification rather than
    /// an upstream or internal failure
    pub fn is_classified(&self) -> bool {
        self.status == STATUS_EDUCATIONAL || self.status == STATUS_NON_EDUCATIONAL
    }
}

impl From<CategoryVerdict> for VerdictDisplay {
    fn from(verdict: CategoryVerdict) -> Self {
        match verdict {
            CategoryVerdict::NonEducational => Self {
                status: STATUS_NON_EDUCATIONAL.to_string(),
                category: String::new(),
                subcategories: Vec::new(),
                subcategory_scores: Vec::new(),
            },
            CategoryVerdict::Educational {
                category,
                subcategories,
                subcategory_scores,
            } => Self {
                status: STATUS_EDUCATIONAL.to_string(),
                category,
                subcategories,
                subcategory_scores,
            },
        }
    }
}

/// Outcome of estimating how much of a video is educational.
///
/// `Percentage` carries a numeric result; the remaining variants are the
/// fixed degradation statuses. An empty transcript is `NoTranscript`,
/// deliberately distinct from a 0% result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EducationalEstimate {
    /// Fraction of transcript segments classified educational, 0-100,
    /// rounded to two decimal places
    Percentage(f64),

    /// The transcript had zero segments to analyze
    NoTranscript,

    /// Transcript was unavailable; verdict from title and description only
    TitleDescriptionOnly { educational: bool },

    /// Every fallback path failed
    AnalysisError,
}

impl EducationalEstimate {
    /// Render the estimate as the user-facing sentence shown by the dashboard
    pub fn summary(&self) -> String {
        match self {
            Self::Percentage(pct) => {
                format!("The {pct:.2}% portion of this video is educational.")
            }
            Self::NoTranscript => {
                "Could not analyze the educational content of this video.".to_string()
            }
            Self::TitleDescriptionOnly { educational: true } => {
                "This video appears to be educational based on its title and description."
                    .to_string()
            }
            Self::TitleDescriptionOnly { educational: false } => {
                "This video does not appear to be educational based on its title and description."
                    .to_string()
            }
            Self::AnalysisError => {
                "Error analyzing video. This may be because the video doesn't have transcripts available."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_text_joins_title_and_description() {
        let text = VideoText::new("Intro to Calculus", "Limits and derivatives.");
        assert_eq!(text.combined(), "Intro to Calculus Limits and derivatives.");
    }

    #[test]
    fn non_educational_verdict_carries_no_category() {
        let verdict = CategoryVerdict::NonEducational;
        assert!(!verdict.is_educational());
        assert_eq!(verdict.category(), None);

        let display = VerdictDisplay::from(verdict);
        assert_eq!(display.status, STATUS_NON_EDUCATIONAL);
        assert!(display.category.is_empty());
        assert!(display.subcategories.is_empty());
        assert!(display.subcategory_scores.is_empty());
    }

    #[test]
    fn failure_display_is_not_classified() {
        let display = VerdictDisplay::failure("something went wrong upstream");
        assert!(!display.is_classified());
        assert!(display.category.is_empty());
    }

    #[test]
    fn percentage_summary_has_two_decimals() {
        let estimate = EducationalEstimate::Percentage(50.0);
        assert_eq!(
            estimate.summary(),
            "The 50.00% portion of this video is educational."
        );
    }

    #[test]
    fn no_transcript_is_distinct_from_zero_percent() {
        assert_ne!(
            EducationalEstimate::NoTranscript,
            EducationalEstimate::Percentage(0.0)
        );
    }
}
