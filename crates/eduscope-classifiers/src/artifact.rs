//! Classifier artifacts: pretrained linear bag-of-words text models
//!
//! An artifact is an opaque trained model deserialized from disk. The format
//! is a tf-idf vectorizer (vocabulary plus inverse document frequencies)
//! followed by a linear layer: one coefficient row per class, or a single row
//! for binary models. Artifacts are immutable after load and safe for
//! concurrent read-only use.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label index the binary educational model assigns to educational text.
pub const LABEL_EDUCATIONAL: usize = 0;

/// Label index the binary educational model assigns to non-educational text.
pub const LABEL_NON_EDUCATIONAL: usize = 1;

/// A pretrained linear text classifier.
///
/// `vocabulary` maps terms to feature columns, `idf` holds one inverse
/// document frequency per column, and `coefficients`/`intercepts` hold one
/// row per class (a single row for binary models, where a positive decision
/// score means label 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    coefficients: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
}

impl ClassifierArtifact {
    /// Build an artifact from its parts, validating structural consistency.
    pub fn new(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f32>,
        coefficients: Vec<Vec<f32>>,
        intercepts: Vec<f32>,
    ) -> Result<Self, String> {
        let artifact = Self {
            vocabulary,
            idf,
            coefficients,
            intercepts,
        };
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check structural consistency of a (possibly just deserialized) model.
    ///
    /// Returns a human-readable reason when the artifact is unusable; the
    /// model store maps that into an artifact-load error.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("model has no coefficient rows".to_string());
        }
        if self.coefficients.len() != self.intercepts.len() {
            return Err(format!(
                "coefficient rows ({}) do not match intercepts ({})",
                self.coefficients.len(),
                self.intercepts.len()
            ));
        }
        let width = self.idf.len();
        for (row_idx, row) in self.coefficients.iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "coefficient row {row_idx} has width {} but vocabulary has {width} columns",
                    row.len()
                ));
            }
        }
        for (term, &column) in &self.vocabulary {
            if column >= width {
                return Err(format!(
                    "term '{term}' maps to column {column}, outside vocabulary width {width}"
                ));
            }
        }
        Ok(())
    }

    /// Number of labels this model can produce.
    ///
    /// A single coefficient row is a binary model with labels {0, 1}.
    pub fn num_labels(&self) -> usize {
        if self.coefficients.len() == 1 {
            2
        } else {
            self.coefficients.len()
        }
    }

    /// Predict the label index for `text`.
    pub fn predict(&self, text: &str) -> usize {
        let scores = self.decision_scores(text);
        if scores.len() == 1 {
            usize::from(scores[0] > 0.0)
        } else {
            argmax(&scores)
        }
    }

    /// Per-class probabilities for `text`, one entry per label.
    ///
    /// Scores are independent one-vs-rest sigmoids and are intentionally not
    /// normalized across classes; downstream display scales them by 100 and
    /// shows them as-is.
    pub fn predict_proba(&self, text: &str) -> Vec<f32> {
        let scores = self.decision_scores(text);
        if scores.len() == 1 {
            let positive = sigmoid(scores[0]);
            vec![1.0 - positive, positive]
        } else {
            scores.into_iter().map(sigmoid).collect()
        }
    }

    /// Raw linear decision score per coefficient row.
    fn decision_scores(&self, text: &str) -> Vec<f32> {
        let features = self.featurize(text);
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                intercept
                    + features
                        .iter()
                        .map(|&(column, weight)| row[column] * weight)
                        .sum::<f32>()
            })
            .collect()
    }

    /// Sparse L2-normalized tf-idf features for `text`.
    fn featurize(&self, text: &str) -> Vec<(usize, f32)> {
        let lowered = text.to_lowercase();
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut features: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(column, tf)| (column, tf * self.idf[column]))
            .collect();

        let norm = features
            .iter()
            .map(|&(_, weight)| weight * weight)
            .sum::<f32>()
            .sqrt();
        if norm > 0.0 {
            for feature in &mut features {
                feature.1 /= norm;
            }
        }
        features
    }
}

fn sigmoid(score: f32) -> f32 {
    1.0 / (1.0 + (-score).exp())
}

fn argmax(scores: &[f32]) -> usize {
    let mut best = 0;
    for (idx, &score) in scores.iter().enumerate() {
        if score > scores[best] {
            best = idx;
        }
    }
    best
}
