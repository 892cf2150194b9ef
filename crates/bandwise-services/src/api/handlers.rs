//! HTTP request handlers for the REST API.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};
use bandwise_types::evaluation::{EvaluationRequest, EvaluationResponse};
use bandwise_types::progress::{ProgressRequest, ProgressResponse};

use super::ApiState;
use super::extract::{has_field, into_request, json_object, require_field};
use crate::error::{ApiError, Result};

pub const NO_BAND_SCORES: &str = "No band scores provided";

/// Build all API routes.
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/evaluate", post(evaluate))
        .route("/plot_progress", post(plot_progress))
        .route("/health", get(health_check))
}

/// Score criteria, look up feedback, and classify the responses.
async fn evaluate(State(state): State<ApiState>, body: Bytes) -> Result<Json<EvaluationResponse>> {
    let body = json_object(&body)?;
    require_field(&body, "user_responses")?;
    require_field(&body, "criteria")?;
    let request: EvaluationRequest = into_request(body)?;

    let evaluator = state.evaluator.clone();
    let response = tokio::task::spawn_blocking(move || evaluator.evaluate(&request))
        .await
        .map_err(|e| ApiError::Internal(format!("evaluation task failed: {e}")))??;

    Ok(Json(response))
}

/// Render a band score history as a base64 PNG.
async fn plot_progress(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<ProgressResponse>> {
    let body = json_object(&body)?;
    if !has_field(&body, "band_scores") {
        return Err(ApiError::BadRequest(NO_BAND_SCORES.into()));
    }
    let request: ProgressRequest = into_request(body)?;
    if request.band_scores.is_empty() {
        return Err(ApiError::BadRequest(NO_BAND_SCORES.into()));
    }

    let points = request.session_points();
    let renderer = state.renderer.clone();
    let plot_url = tokio::task::spawn_blocking(move || renderer.render_base64(&points))
        .await
        .map_err(|e| ApiError::Internal(format!("render task failed: {e}")))??;

    Ok(Json(ProgressResponse { plot_url }))
}

/// Always healthy while the process is serving.
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}
