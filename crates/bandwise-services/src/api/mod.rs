//! REST API.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | `POST` | `/evaluate` | band score, feedback, proficiency tier |
//! | `POST` | `/plot_progress` | base64 PNG of a band score history |
//! | `GET` | `/health` | liveness |

pub mod extract;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use bandwise_core::{Evaluator, ProgressRenderer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state accessible by all API handlers.
///
/// Both members are immutable after startup and shared across requests.
#[derive(Clone)]
pub struct ApiState {
    pub evaluator: Arc<Evaluator>,
    pub renderer: Arc<ProgressRenderer>,
}

impl ApiState {
    pub fn new(evaluator: Evaluator, renderer: ProgressRenderer) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
            renderer: Arc::new(renderer),
        }
    }
}

/// Build the API router with all routes.
pub fn build_router(state: ApiState, cors_origins: &[String]) -> Router {
    let cors = if cors_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<_> = cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(handlers::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
