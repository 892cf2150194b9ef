//! Progress chart request/response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /plot_progress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRequest {
    /// Historical band scores in session order.
    pub band_scores: Vec<f64>,
}

impl ProgressRequest {
    /// Pair each score with its 1-based session index.
    pub fn session_points(&self) -> Vec<(f64, f64)> {
        session_points(&self.band_scores)
    }
}

/// Pair each score with its 1-based session index.
pub fn session_points(scores: &[f64]) -> Vec<(f64, f64)> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| ((i + 1) as f64, score))
        .collect()
}

/// Body of a successful `POST /plot_progress` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressResponse {
    /// Base64-encoded PNG bytes.
    pub plot_url: String,
}
