//! Evaluation pipeline.
//!
//! Band score and feedback come from the criteria alone; the proficiency
//! tier comes from the responses alone. Either the whole response is
//! produced or an error is returned.

use std::sync::Arc;

use bandwise_types::evaluation::{EvaluationRequest, EvaluationResponse};
use tracing::info;

use crate::classifier::ProficiencyClassifier;
use crate::error::Result;
use crate::feedback::generate_feedback;
use crate::nlp::SentenceSegmenter;
use crate::scoring::band_score;

/// Runs an [`EvaluationRequest`] through scoring, feedback lookup, and
/// classification.
#[derive(Clone)]
pub struct Evaluator {
    classifier: ProficiencyClassifier,
}

impl Evaluator {
    pub fn new(segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        Self {
            classifier: ProficiencyClassifier::new(segmenter),
        }
    }

    pub fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResponse> {
        let band_score = band_score(&request.criteria);
        let feedback = generate_feedback(band_score);
        let user_level = self.classifier.classify(&request.joined_text())?;

        info!(
            band_score,
            user_level = %user_level,
            responses = request.user_responses.len(),
            "evaluation complete"
        );

        Ok(EvaluationResponse {
            band_score,
            feedback,
            user_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::feedback::UNRECOGNIZED_SUMMARY;
    use crate::nlp::{LanguageModel, RuleSegmenter};
    use bandwise_types::evaluation::{Criteria, ProficiencyTier};

    fn evaluator() -> Evaluator {
        Evaluator::new(Arc::new(RuleSegmenter::new(
            LanguageModel::builtin("en_core").unwrap(),
        )))
    }

    #[test]
    fn band_seven_scenario() {
        let req = EvaluationRequest {
            user_responses: vec!["I think cities should invest in public transport.".into()],
            criteria: Criteria::new(8.0, 7.0, 6.0, 7.0),
        };
        let resp = evaluator().evaluate(&req).unwrap();
        assert_eq!(resp.band_score, 7);
        assert_eq!(resp.feedback, generate_feedback(7));
        assert_eq!(resp.user_level, ProficiencyTier::Beginner);
    }

    #[test]
    fn empty_responses_are_beginner() {
        let req = EvaluationRequest {
            user_responses: vec![],
            criteria: Criteria::new(6.0, 6.0, 6.0, 6.0),
        };
        let resp = evaluator().evaluate(&req).unwrap();
        assert_eq!(resp.band_score, 6);
        assert_eq!(resp.user_level, ProficiencyTier::Beginner);
    }

    #[test]
    fn all_zero_criteria_get_sentinel_feedback() {
        let req = EvaluationRequest {
            user_responses: vec!["Hello.".into()],
            criteria: Criteria::default(),
        };
        let resp = evaluator().evaluate(&req).unwrap();
        assert_eq!(resp.band_score, 0);
        assert_eq!(resp.feedback.summary, UNRECOGNIZED_SUMMARY);
    }

    #[test]
    fn responses_are_joined_before_segmentation() {
        // Two fragments without terminal punctuation form one sentence once
        // joined: 5 + 6 = 11 tokens.
        let req = EvaluationRequest {
            user_responses: vec![
                "my town has a small".into(),
                "library and a very busy market".into(),
            ],
            criteria: Criteria::default(),
        };
        let resp = evaluator().evaluate(&req).unwrap();
        assert_eq!(resp.user_level, ProficiencyTier::Intermediate);
    }

    #[test]
    fn segmentation_failure_yields_no_result() {
        struct Broken;
        impl SentenceSegmenter for Broken {
            fn sentence_lengths(&self, _text: &str) -> Result<Vec<usize>> {
                Err(CoreError::Segmentation("boom".into()))
            }
            fn model_name(&self) -> &str {
                "broken"
            }
        }

        let req = EvaluationRequest {
            user_responses: vec!["text".into()],
            criteria: Criteria::new(7.0, 7.0, 7.0, 7.0),
        };
        assert!(Evaluator::new(Arc::new(Broken)).evaluate(&req).is_err());
    }
}
