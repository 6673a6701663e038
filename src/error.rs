//! Error taxonomy for the HTTP boundary and for collaborator calls.
//!
//! Every failure reaches the client as `{"error": ..., "kind": ...}`; nothing is
//! turned into a made-up success payload.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Failures reported by an external collaborator (text generation, video
/// search, document extraction).
#[allow(dead_code)]
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CollabError {
  #[error("quota exceeded: {0}")]
  Quota(String),

  #[error("authentication rejected: {0}")]
  Auth(String),

  #[error("transport error: {0}")]
  Transport(String),

  #[error("unsupported file type: {0}")]
  UnsupportedFile(String),

  #[error("could not extract document text: {0}")]
  Extraction(String),
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  InvalidInput(String),

  #[error("upstream service failed: {0}")]
  Collaborator(CollabError),

  #[error("model response was not valid JSON: {0}")]
  MalformedResponse(String),

  #[error("{0}")]
  GenerationFailed(String),

  #[error("{0} is not configured")]
  Unavailable(&'static str),
}

impl From<CollabError> for ApiError {
  fn from(e: CollabError) -> Self {
    match e {
      CollabError::UnsupportedFile(_) | CollabError::Extraction(_) => ApiError::InvalidInput(e.to_string()),
      other => ApiError::Collaborator(other),
    }
  }
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
      ApiError::Collaborator(_) | ApiError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
      ApiError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
  }

  pub fn kind(&self) -> &'static str {
    match self {
      ApiError::InvalidInput(_) => "invalid_input",
      ApiError::Collaborator(_) => "collaborator",
      ApiError::MalformedResponse(_) => "malformed_response",
      ApiError::GenerationFailed(_) => "generation_failed",
      ApiError::Unavailable(_) => "unavailable",
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub error: String,
  pub kind: &'static str,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    warn!(target: "coursegen_backend", %status, kind = self.kind(), error = %self, "Request failed");
    let body = Json(ErrorBody { error: self.to_string(), kind: self.kind() });
    (status, body).into_response()
  }
}
