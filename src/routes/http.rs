//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Bodies are taken as `Result<Json<_>, JsonRejection>` so malformed JSON gets
//! the same error envelope as every other invalid input.

use std::sync::Arc;

use axum::{
  extract::{rejection::JsonRejection, State},
  response::IntoResponse,
  Json,
};
use serde_json::Value;
use tracing::instrument;

use crate::domain::CourseRequest;
use crate::error::ApiError;
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

pub const ENDPOINTS: &[&str] = &[
  "/generate-course",
  "/doubt-chatbot",
  "/generate-question",
  "/predict-level",
  "/course-recommendation",
  "/detect-domain-from-file",
];

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
  payload
    .map(|Json(v)| v)
    .map_err(|e| ApiError::InvalidInput(e.body_text()))
}

#[instrument(level = "info")]
pub async fn http_index() -> impl IntoResponse {
  Json(IndexOut { message: "Full Course Generator API", endpoints: ENDPOINTS })
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip_all)]
pub async fn http_predict_level(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<LevelOut>, ApiError> {
  let level = predict_level(&state, &body(payload)?)?;
  Ok(Json(LevelOut { level }))
}

#[instrument(level = "info", skip_all)]
pub async fn http_generate_course(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
  let req = body(payload)?;
  Ok(Json(generate_course(&state, &req).await?))
}

#[instrument(level = "info", skip_all)]
pub async fn http_generate_question(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
  let req = body(payload)?;
  Ok(Json(generate_questions(&state, &req).await?))
}

#[instrument(level = "info", skip_all)]
pub async fn http_doubt_chatbot(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<DoubtIn>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
  let DoubtIn { ques } = body(payload)?;
  Ok(Json(doubt_answer(&state, &ques).await?))
}

#[instrument(level = "info", skip_all)]
pub async fn http_course_recommendation(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<RecommendationIn>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
  let req = body(payload)?;
  Ok(Json(recommend_courses(&state, &req.student_level, &req.course).await?))
}

#[instrument(level = "info", skip_all)]
pub async fn http_detect_domain(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<FileIn>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
  let FileIn { file_url } = body(payload)?;
  Ok(Json(detect_domain(&state, &file_url).await?))
}
