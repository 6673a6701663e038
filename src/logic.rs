//! Core behaviors behind the HTTP handlers.
//!
//! This includes:
//!   - Level prediction (the only local decision logic)
//!   - Course generation: structure, then per-unit details, content and video
//!   - Question generation: structure, then per-unit MCQs, run concurrently
//!   - Doubt chatbot, course recommendation and domain detection
//!
//! Every AI-backed path is prompt rendering, one or more collaborator calls and
//! a reshape of the returned text. Collaborator failures are surfaced as
//! errors; only whole units are ever dropped, never patched.

use std::time::Instant;

use futures::future::join_all;
use serde_json::{json, Map, Value};
use tracing::{debug, error, info, instrument, warn};

use crate::collab::TextGenerator;
use crate::domain::{CourseRequest, PerformanceSample, ProficiencyLabel, MAX_UNITS, MIN_UNITS};
use crate::error::ApiError;
use crate::reshape::{domain_result, parse_json_object, parse_json_text, parse_recommendations, string_list};
use crate::state::AppState;
use crate::util::{file_extension, file_name_from_url};

const SUPPORTED_DOCUMENTS: [&str; 3] = ["docx", "pdf", "pptx"];

#[instrument(level = "info", skip(state, body))]
pub fn predict_level(state: &AppState, body: &Value) -> Result<ProficiencyLabel, ApiError> {
  let sample = PerformanceSample::from_json(body)?;
  let level = state.policy.classify(&sample);
  info!(target: "level", score = sample.score, time_taken = sample.time_taken, %level, "Level predicted");
  Ok(level)
}

#[instrument(level = "info", skip(state, req), fields(subject = %req.subject, units = req.units, difficulty = %req.difficulty))]
pub async fn generate_course(state: &AppState, req: &CourseRequest) -> Result<Value, ApiError> {
  check_units(req)?;
  let gen = state.text_generator()?;

  let mut course = course_structure(state, gen, req).await?;
  let titles = unit_titles(&course)?;

  let mut units = Vec::with_capacity(titles.len());
  for title in &titles {
    match unit_details(state, gen, title, req).await {
      Ok(unit) => units.push(Value::Object(unit)),
      Err(e) => warn!(target: "course", unit = %title, error = %e, "Skipping unit"),
    }
  }
  if units.is_empty() {
    return Err(ApiError::GenerationFailed("Failed to generate any unit details".into()));
  }

  info!(target: "course", requested = titles.len(), generated = units.len(), "Course generated");
  course.insert("units".into(), Value::Array(units));
  Ok(Value::Object(course))
}

#[instrument(level = "info", skip(state, req), fields(subject = %req.subject, units = req.units, difficulty = %req.difficulty))]
pub async fn generate_questions(state: &AppState, req: &CourseRequest) -> Result<Value, ApiError> {
  check_units(req)?;
  let gen = state.text_generator()?;

  let mut course = course_structure(state, gen, req).await?;
  let titles = unit_titles(&course)?;

  let results = join_all(titles.iter().map(|t| unit_with_mcqs(state, gen, t, req))).await;
  let units: Vec<Value> = titles
    .iter()
    .zip(results)
    .filter_map(|(title, r)| match r {
      Ok(unit) => Some(Value::Object(unit)),
      Err(e) => {
        warn!(target: "course", unit = %title, error = %e, "Dropping unit assessment");
        None
      }
    })
    .collect();
  if units.is_empty() {
    return Err(ApiError::GenerationFailed("Failed to generate any unit details".into()));
  }

  info!(target: "course", requested = titles.len(), generated = units.len(), "Assessments generated");
  course.insert("units".into(), Value::Array(units));
  Ok(Value::Object(course))
}

#[instrument(level = "info", skip(state, question), fields(question_len = question.len()))]
pub async fn doubt_answer(state: &AppState, question: &str) -> Result<Value, ApiError> {
  if question.trim().is_empty() {
    return Err(ApiError::InvalidInput("field `ques` must not be empty".into()));
  }
  let gen = state.text_generator()?;
  let answer = ask(gen, "doubt_chatbot", &state.prompts.doubt_chatbot(question)).await?;
  Ok(json!({ "answer": answer.trim() }))
}

#[instrument(level = "info", skip(state))]
pub async fn recommend_courses(state: &AppState, student_level: &str, course: &str) -> Result<Value, ApiError> {
  let gen = state.text_generator()?;
  let prompt = state.prompts.course_recommendation(student_level, course);
  let text = ask(gen, "course_recommendation", &prompt).await?;
  parse_recommendations(&text)
}

#[instrument(level = "info", skip(state))]
pub async fn detect_domain(state: &AppState, file_url: &str) -> Result<Value, ApiError> {
  let filename = file_name_from_url(file_url);
  match file_extension(&filename) {
    Some(ext) if SUPPORTED_DOCUMENTS.contains(&ext.as_str()) => {}
    _ => return Err(ApiError::InvalidInput("Unsupported file type.".into())),
  }

  let extractor = state.document_extractor()?;
  let gen = state.text_generator()?;

  let content = extractor.extract(file_url).await?;
  if content.trim().is_empty() {
    return Err(ApiError::InvalidInput("Extracted content is empty.".into()));
  }
  debug!(target: "coursegen_backend", %filename, content_len = content.len(), "Document extracted");

  let text = ask(gen, "domain_detection", &state.prompts.domain_detection(&content)).await?;
  domain_result(&filename, &text)
}

// -------- Pipeline steps --------

fn check_units(req: &CourseRequest) -> Result<(), ApiError> {
  if req.units_in_range() {
    Ok(())
  } else {
    Err(ApiError::InvalidInput(format!(
      "field `units` must be between {MIN_UNITS} and {MAX_UNITS}, got {}",
      req.units
    )))
  }
}

/// One collaborator call with latency and size logging (never contents).
async fn ask(gen: &dyn TextGenerator, step: &'static str, prompt: &str) -> Result<String, ApiError> {
  let start = Instant::now();
  let result = gen.generate(prompt, None).await;
  let elapsed = start.elapsed();
  match &result {
    Ok(text) => debug!(target: "coursegen_backend", step, ?elapsed, prompt_len = prompt.len(), response_len = text.len(), "Text generation finished"),
    Err(e) => error!(target: "coursegen_backend", step, ?elapsed, error = %e, "Text generation failed"),
  }
  result.map_err(ApiError::from)
}

async fn course_structure(
  state: &AppState,
  gen: &dyn TextGenerator,
  req: &CourseRequest,
) -> Result<Map<String, Value>, ApiError> {
  let text = ask(gen, "course_structure", &state.prompts.course_structure(req)).await?;
  parse_json_object(&text)
}

/// Unit titles from the structure's `units` array; entries without a title are skipped.
fn unit_titles(course: &Map<String, Value>) -> Result<Vec<String>, ApiError> {
  let units = course
    .get("units")
    .and_then(Value::as_array)
    .ok_or_else(|| ApiError::MalformedResponse("course structure has no `units` array".into()))?;
  let titles: Vec<String> = units
    .iter()
    .filter_map(|u| u.get("unitTitle").and_then(Value::as_str))
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(str::to_string)
    .collect();
  if titles.len() < units.len() {
    warn!(target: "course", listed = units.len(), titled = titles.len(), "Some units have no title");
  }
  Ok(titles)
}

#[instrument(level = "debug", skip(state, gen, req))]
async fn unit_details(
  state: &AppState,
  gen: &dyn TextGenerator,
  title: &str,
  req: &CourseRequest,
) -> Result<Map<String, Value>, ApiError> {
  let text = ask(gen, "unit_structure", &state.prompts.unit_structure(title, req)).await?;
  let mut unit = parse_json_object(&text)?;

  let topics = string_list(&unit, "topicsCovered");
  let objectives = string_list(&unit, "learningObjectives");
  let content_prompt = state.prompts.unit_content(title, &topics, &objectives, req);
  let content = ask(gen, "unit_content", &content_prompt).await?;
  unit.insert("detailedContent".into(), parse_json_text(&content)?);

  let query = format!("{} {} {}", title, req.subject, req.focus_area);
  unit.insert("youtube_video_url".into(), video_url(state, &query).await);
  Ok(unit)
}

#[instrument(level = "debug", skip(state, gen, req))]
async fn unit_with_mcqs(
  state: &AppState,
  gen: &dyn TextGenerator,
  title: &str,
  req: &CourseRequest,
) -> Result<Map<String, Value>, ApiError> {
  let text = ask(gen, "unit_title", &state.prompts.unit_title(title, req)).await?;
  let mut unit = parse_json_object(&text)?;
  let mcqs = ask(gen, "unit_mcqs", &state.prompts.unit_mcqs(title, req)).await?;
  unit.insert("assessment".into(), parse_json_text(&mcqs)?);
  Ok(unit)
}

/// First search hit, or `null` when there is none. A failed search does not
/// fail the unit.
async fn video_url(state: &AppState, query: &str) -> Value {
  let Some(videos) = state.video_search() else {
    return Value::Null;
  };
  match videos.search(query).await {
    Ok(hits) => match hits.into_iter().next() {
      Some(v) => Value::String(v.url),
      None => {
        debug!(target: "course", %query, "No video found");
        Value::Null
      }
    },
    Err(e) => {
      warn!(target: "course", %query, error = %e, "Video search failed");
      Value::Null
    }
  }
}
