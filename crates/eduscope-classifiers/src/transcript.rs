//! Transcript aggregation: segment-level verdicts into a video-level
//! educational percentage
//!
//! Each segment is classified independently by the binary educational model;
//! there is no cross-segment state. Segments are weighted equally regardless
//! of duration.

use crate::artifact::LABEL_EDUCATIONAL;
use crate::store::{ModelStore, EDUCATIONAL_MODEL};
use eduscope_core::{Result, TranscriptSegment};
use std::sync::Arc;
use tracing::debug;

/// Result of aggregating a transcript.
///
/// `NoData` means there was nothing to analyze; it is never conflated with a
/// 0% educational result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranscriptEstimate {
    /// Percentage of segments classified educational, 0-100, rounded to two
    /// decimal places
    Percentage(f64),

    /// The segment list was empty
    NoData,
}

/// Applies the binary educational model across a video's transcript.
pub struct TranscriptAggregator {
    store: Arc<ModelStore>,
}

impl TranscriptAggregator {
    /// Create an aggregator over a model store.
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self { store }
    }

    /// Estimate the educational share of a transcript.
    ///
    /// An empty slice yields [`TranscriptEstimate::NoData`]. Otherwise every
    /// segment's text is classified independently and the result is
    /// `100 * educational / total`, rounded to two decimals.
    pub fn educational_percentage(
        &self,
        segments: &[TranscriptSegment],
    ) -> Result<TranscriptEstimate> {
        if segments.is_empty() {
            return Ok(TranscriptEstimate::NoData);
        }

        let model = self.store.load(EDUCATIONAL_MODEL)?;
        let educational = segments
            .iter()
            .filter(|segment| model.predict(&segment.text) == LABEL_EDUCATIONAL)
            .count();
        let total = segments.len();
        debug!(educational, total, "aggregated transcript segments");

        let percentage = 100.0 * educational as f64 / total as f64;
        Ok(TranscriptEstimate::Percentage(round2(percentage)))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
