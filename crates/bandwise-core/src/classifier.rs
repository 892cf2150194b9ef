//! Proficiency classification from average sentence length.
//!
//! Average sentence length (tokens per sentence) is bucketed with two
//! strict thresholds: above 15 is [`Advanced`](ProficiencyTier::Advanced),
//! above 10 is [`Intermediate`](ProficiencyTier::Intermediate), anything
//! else, including text with no sentences at all, is
//! [`Beginner`](ProficiencyTier::Beginner).

use std::sync::Arc;

use bandwise_types::evaluation::ProficiencyTier;
use tracing::debug;

use crate::error::Result;
use crate::nlp::SentenceSegmenter;

/// Averages strictly above this are Advanced.
pub const ADVANCED_THRESHOLD: f64 = 15.0;
/// Averages strictly above this (and not Advanced) are Intermediate.
pub const INTERMEDIATE_THRESHOLD: f64 = 10.0;

/// Sentence statistics for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceStats {
    pub sentence_count: usize,
    pub token_count: usize,
    /// `token_count / sentence_count`, or 0 when there are no sentences.
    pub average_length: f64,
}

impl SentenceStats {
    pub fn from_lengths(lengths: &[usize]) -> Self {
        let sentence_count = lengths.len();
        let token_count: usize = lengths.iter().sum();
        let average_length = if sentence_count > 0 {
            token_count as f64 / sentence_count as f64
        } else {
            0.0
        };
        Self {
            sentence_count,
            token_count,
            average_length,
        }
    }

    pub fn tier(&self) -> ProficiencyTier {
        tier_for(self.average_length)
    }
}

/// Map an average sentence length to a tier.
pub fn tier_for(average_length: f64) -> ProficiencyTier {
    if average_length > ADVANCED_THRESHOLD {
        ProficiencyTier::Advanced
    } else if average_length > INTERMEDIATE_THRESHOLD {
        ProficiencyTier::Intermediate
    } else {
        ProficiencyTier::Beginner
    }
}

/// Classifies text using a shared segmenter.
#[derive(Clone)]
pub struct ProficiencyClassifier {
    segmenter: Arc<dyn SentenceSegmenter>,
}

impl ProficiencyClassifier {
    pub fn new(segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        Self { segmenter }
    }

    /// Segment `text` and compute its statistics.
    pub fn analyze(&self, text: &str) -> Result<SentenceStats> {
        let lengths = self.segmenter.sentence_lengths(text)?;
        let stats = SentenceStats::from_lengths(&lengths);
        debug!(
            model = self.segmenter.model_name(),
            sentences = stats.sentence_count,
            tokens = stats.token_count,
            average = stats.average_length,
            "text segmented"
        );
        Ok(stats)
    }

    pub fn classify(&self, text: &str) -> Result<ProficiencyTier> {
        Ok(self.analyze(text)?.tier())
    }
}
