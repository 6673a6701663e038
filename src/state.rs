//! Application state: level policy, prompt templates and the optional
//! collaborators behind the AI-backed endpoints.
//!
//! Built once at start-up from `AppConfig` and shared read-only behind an
//! `Arc`; nothing in here is mutated while serving.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::collab::{DocumentExtractor, TextGenerator, VideoSearch};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::level::LevelPolicy;
use crate::prompts::Prompts;

#[derive(Clone)]
pub struct AppState {
  pub policy: LevelPolicy,
  pub prompts: Prompts,
  pub text_gen: Option<Arc<dyn TextGenerator>>,
  pub videos: Option<Arc<dyn VideoSearch>>,
  pub documents: Option<Arc<dyn DocumentExtractor>>,
}

impl AppState {
  #[instrument(level = "info", skip_all)]
  pub fn new(cfg: AppConfig) -> Self {
    let AppConfig { level, prompts } = cfg;
    info!(
      target: "level",
      advanced_min_score = level.advanced_min_score,
      advanced_max_time = level.advanced_max_time,
      beginner_max_score = level.beginner_max_score,
      beginner_min_time = level.beginner_min_time,
      "Level policy active"
    );
    Self { policy: level, prompts, text_gen: None, videos: None, documents: None }
  }

  #[allow(dead_code)]
  pub fn with_text_generator(mut self, g: Arc<dyn TextGenerator>) -> Self {
    self.text_gen = Some(g);
    self
  }

  #[allow(dead_code)]
  pub fn with_video_search(mut self, v: Arc<dyn VideoSearch>) -> Self {
    self.videos = Some(v);
    self
  }

  #[allow(dead_code)]
  pub fn with_document_extractor(mut self, d: Arc<dyn DocumentExtractor>) -> Self {
    self.documents = Some(d);
    self
  }

  /// Log which collaborators are wired; AI endpoints answer 503 for missing ones.
  pub fn log_collaborators(&self) {
    let text = self.text_gen.is_some();
    let video = self.videos.is_some();
    let docs = self.documents.is_some();
    if text {
      info!(target: "coursegen_backend", text_generation = text, video_search = video, document_extraction = docs, "Collaborators wired");
    } else {
      warn!(target: "coursegen_backend", video_search = video, document_extraction = docs, "No text generator wired; AI-backed endpoints will answer 503");
    }
  }

  pub fn text_generator(&self) -> Result<&dyn TextGenerator, ApiError> {
    self.text_gen.as_deref().ok_or(ApiError::Unavailable("text generation"))
  }

  pub fn document_extractor(&self) -> Result<&dyn DocumentExtractor, ApiError> {
    self.documents.as_deref().ok_or(ApiError::Unavailable("document extraction"))
  }

  /// Video search is optional even for course generation.
  pub fn video_search(&self) -> Option<&dyn VideoSearch> {
    self.videos.as_deref()
  }
}
