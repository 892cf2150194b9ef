//! Sentence segmentation.
//!
//! The proficiency classifier only needs per-sentence token counts. Any
//! backend that can produce them implements [`SentenceSegmenter`]; the
//! built-in one is [`RuleSegmenter`], configured by a [`LanguageModel`]
//! loaded once at startup through [`ModelStore`].
//!
//! A segmenter is shared read-only across concurrent requests, so the trait
//! requires `Send + Sync` and takes `&self`.

pub mod model;
pub mod segmenter;

pub use model::{LanguageModel, ModelStore};
pub use segmenter::RuleSegmenter;

use crate::error::Result;

/// Splits text into sentences and counts tokens per sentence.
pub trait SentenceSegmenter: Send + Sync {
    /// Token count of every sentence in `text`, in order.
    ///
    /// Empty or whitespace-only text yields an empty vector.
    fn sentence_lengths(&self, text: &str) -> Result<Vec<usize>>;

    /// Identifier of the model backing this segmenter, for logging.
    fn model_name(&self) -> &str;
}
