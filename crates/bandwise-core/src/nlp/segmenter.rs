//! Rule-based sentence segmenter.
//!
//! Sentence boundaries come from the Unicode sentence-break algorithm
//! (UAX #29). A boundary directly after a full stop that terminates one of
//! the model's abbreviations is discarded, so "Dr. Smith arrived." stays a
//! single sentence. Tokens are the non-whitespace word-boundary segments of
//! a sentence: each word and each punctuation mark counts once.

use std::collections::BTreeSet;

use unicode_segmentation::UnicodeSegmentation;

use super::{LanguageModel, SentenceSegmenter};
use crate::error::Result;

/// Segmenter driven by a [`LanguageModel`].
#[derive(Debug, Clone)]
pub struct RuleSegmenter {
    model: LanguageModel,
    abbreviations: BTreeSet<String>,
}

impl RuleSegmenter {
    pub fn new(model: LanguageModel) -> Self {
        let abbreviations = model.abbreviation_set();
        Self {
            model,
            abbreviations,
        }
    }

    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    /// Split `text` into sentences. Whitespace-only pieces are dropped and
    /// surrounding whitespace is trimmed.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for (offset, piece) in text.split_sentence_bound_indices() {
            let end = offset + piece.len();
            if end < text.len() && self.ends_with_abbreviation(piece) {
                continue;
            }
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }

        sentences
    }

    fn ends_with_abbreviation(&self, piece: &str) -> bool {
        let Some(body) = piece.trim_end().strip_suffix('.') else {
            return false;
        };
        let last_word = body
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default()
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        !last_word.is_empty() && self.abbreviations.contains(&last_word.to_lowercase())
    }
}

/// Number of tokens in `sentence`.
pub fn token_count(sentence: &str) -> usize {
    sentence
        .split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

impl SentenceSegmenter for RuleSegmenter {
    fn sentence_lengths(&self, text: &str) -> Result<Vec<usize>> {
        Ok(self.sentences(text).into_iter().map(token_count).collect())
    }

    fn model_name(&self) -> &str {
        &self.model.name
    }
}
