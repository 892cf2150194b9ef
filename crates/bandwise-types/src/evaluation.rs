//! Evaluation request/response types.
//!
//! A submission carries the writer's responses plus four rubric criteria
//! scores. The service answers with an integer band score, the feedback
//! record for that band, and a coarse proficiency tier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rubric criteria scores.
///
/// Each field is optional; an absent or `null` criterion counts as zero.
/// No range is enforced on the values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(rename = "TaskAchievement", default)]
    pub task_achievement: Option<f64>,

    #[serde(rename = "Coherence", default)]
    pub coherence: Option<f64>,

    #[serde(rename = "LexicalResource", default)]
    pub lexical_resource: Option<f64>,

    #[serde(rename = "Grammar", default)]
    pub grammar: Option<f64>,
}

impl Criteria {
    /// Build criteria with all four scores present.
    pub fn new(task_achievement: f64, coherence: f64, lexical_resource: f64, grammar: f64) -> Self {
        Self {
            task_achievement: Some(task_achievement),
            coherence: Some(coherence),
            lexical_resource: Some(lexical_resource),
            grammar: Some(grammar),
        }
    }

    /// Sum of the four criteria, missing ones counted as zero.
    pub fn total(&self) -> f64 {
        [
            self.task_achievement,
            self.coherence,
            self.lexical_resource,
            self.grammar,
        ]
        .iter()
        .map(|v| v.unwrap_or(0.0))
        .sum()
    }
}

/// Body of `POST /evaluate` after presence checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Free-text responses, joined with single spaces before segmentation.
    pub user_responses: Vec<String>,

    /// Rubric scores.
    pub criteria: Criteria,
}

impl EvaluationRequest {
    /// The text handed to the sentence segmenter.
    pub fn joined_text(&self) -> String {
        self.user_responses.join(" ")
    }
}

/// Canned feedback for one band score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub summary: String,
    pub strengths: String,
    pub areas_for_improvement: String,
}

impl FeedbackRecord {
    pub fn new(
        summary: impl Into<String>,
        strengths: impl Into<String>,
        areas_for_improvement: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            strengths: strengths.into(),
            areas_for_improvement: areas_for_improvement.into(),
        }
    }
}

/// Coarse proficiency classification derived from sentence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProficiencyTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ProficiencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a successful `POST /evaluate` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub band_score: i64,
    pub feedback: FeedbackRecord,
    pub user_level: ProficiencyTier,
}
