//! Band score feedback table.
//!
//! Bands 5 through 8 have canned feedback. Every other score, including
//! zero, negatives, and anything above 8, maps to the "not recognized"
//! record. The lookup never fails.

use bandwise_types::evaluation::FeedbackRecord;

/// Summary line of the record returned for bands without feedback.
pub const UNRECOGNIZED_SUMMARY: &str = "Band score not recognized.";

/// Look up the feedback record for `band_score`.
pub fn generate_feedback(band_score: i64) -> FeedbackRecord {
    match band_score {
        5 => FeedbackRecord::new(
            "Modest user: you convey the overall meaning in most situations, \
             though frequent mistakes get in the way.",
            "Ideas are relevant to the task and basic sentence patterns are \
             used with reasonable control.",
            "Develop each point with supporting detail, use a wider range of \
             linking words, and reduce errors in verb tense and agreement.",
        ),
        6 => FeedbackRecord::new(
            "Competent user: you communicate effectively despite some \
             inaccuracies and inappropriate word choices.",
            "The response addresses all parts of the task with a clear overall \
             progression and a mix of simple and complex sentences.",
            "Make the position clearer throughout, avoid mechanical or \
             repetitive cohesive devices, and widen less common vocabulary.",
        ),
        7 => FeedbackRecord::new(
            "Good user: you handle complex language well with only occasional \
             inaccuracies.",
            "Ideas are logically organised, vocabulary is flexible with some \
             less common items, and complex structures are used frequently.",
            "Extend and fully support main ideas, tighten paragraph focus, and \
             eliminate the remaining slips in collocation and punctuation.",
        ),
        8 => FeedbackRecord::new(
            "Very good user: you show fully operational command of the \
             language with only rare, unsystematic errors.",
            "Cohesion is managed skilfully, vocabulary is used fluently and \
             precisely, and most sentences are error-free.",
            "Polish occasional word-choice imprecision and make sure every \
             point is developed to the same depth.",
        ),
        _ => FeedbackRecord::new(UNRECOGNIZED_SUMMARY, "N/A", "N/A"),
    }
}
