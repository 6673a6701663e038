//! Router assembly: HTTP endpoints and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - index and health at `/` and `/health`
/// - level prediction at `/predict-level`
/// - AI-backed endpoints (503 until a text generator is wired)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(http::http_index))
        .route("/health", get(http::http_health))
        .route("/predict-level", post(http::http_predict_level))
        .route("/generate-course", post(http::http_generate_course))
        .route("/generate-question", post(http::http_generate_question))
        .route("/doubt-chatbot", post(http::http_doubt_chatbot))
        .route("/course-recommendation", post(http::http_course_recommendation))
        .route("/detect-domain-from-file", post(http::http_detect_domain))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
