//! Turning free-form model text into JSON.
//!
//! Models tend to wrap JSON in Markdown code fences (```` ```json ````) or
//! triple quotes; those are removed before parsing.

use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::util::trunc_for_log;

const OPENERS: [&str; 3] = ["```json", "```", "'''"];
const CLOSERS: [&str; 2] = ["```", "'''"];

/// Strip one leading and one trailing fence marker, plus surrounding whitespace.
pub fn strip_code_fences(text: &str) -> &str {
  let mut s = text.trim();
  if let Some(open) = OPENERS.iter().find(|o| s.starts_with(**o)) {
    s = &s[open.len()..];
  }
  if let Some(close) = CLOSERS.iter().find(|c| s.ends_with(**c)) {
    s = &s[..s.len() - close.len()];
  }
  s.trim()
}

/// Parse model text as a JSON value after removing fences.
pub fn parse_json_text(text: &str) -> Result<Value, ApiError> {
  let cleaned = strip_code_fences(text);
  serde_json::from_str(cleaned)
    .map_err(|e| ApiError::MalformedResponse(format!("{e} in `{}`", trunc_for_log(cleaned, 120))))
}

/// Like `parse_json_text` but the top level must be an object.
pub fn parse_json_object(text: &str) -> Result<Map<String, Value>, ApiError> {
  match parse_json_text(text)? {
    Value::Object(map) => Ok(map),
    other => Err(ApiError::MalformedResponse(format!(
      "expected a JSON object, got `{}`",
      trunc_for_log(&other.to_string(), 120)
    ))),
  }
}

/// Recommendations come back as a comma-separated run of objects, with or
/// without the enclosing brackets. Normalize to `{"recommendations": [...]}`.
pub fn parse_recommendations(text: &str) -> Result<Value, ApiError> {
  let cleaned = strip_code_fences(text);
  let inner = cleaned.trim_start_matches('[').trim_end_matches(']').trim();
  let wrapped = format!("[{inner}]");
  let list: Vec<Value> = serde_json::from_str(&wrapped).map_err(|e| {
    ApiError::MalformedResponse(format!("failed to parse recommendations: {e}"))
  })?;
  Ok(json!({ "recommendations": list }))
}

/// Build the domain-detection payload, defaulting fields the model left out.
pub fn domain_result(filename: &str, model_text: &str) -> Result<Value, ApiError> {
  let obj = parse_json_object(model_text)?;
  let field = |key: &str, default: &str| -> Value {
    match obj.get(key) {
      Some(v) if !v.is_null() => v.clone(),
      _ => Value::String(default.to_string()),
    }
  };
  Ok(json!({
    "filename": filename,
    "domain": field("domain", "Unknown"),
    "subdomain": field("subdomain", "Unknown"),
    "explanation": field("explanation", "No explanation provided."),
  }))
}

/// Collect an array of strings from a JSON object field; missing or
/// non-string entries are skipped.
pub fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
  obj
    .get(key)
    .and_then(Value::as_array)
    .map(|items| items.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_json_fence() {
    assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    assert_eq!(strip_code_fences("  ```\n[1]\n```  "), "[1]");
    assert_eq!(strip_code_fences("'''{\"a\": 1}'''"), "{\"a\": 1}");
    assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
  }

  #[test]
  fn parse_json_text_reports_malformed_output() {
    let err = parse_json_text("Sure! Here is your course.").unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
  }

  #[test]
  fn parse_json_object_rejects_arrays() {
    assert!(parse_json_object("[1, 2]").is_err());
    let obj = parse_json_object("```json\n{\"unitTitle\": \"Intro\"}\n```").unwrap();
    assert_eq!(obj["unitTitle"], "Intro");
  }

  #[test]
  fn recommendations_without_brackets_are_wrapped() {
    let text = "```json\n{\"subject\": \"Python\", \"units\": 3},\n{\"subject\": \"SQL\", \"units\": 2}\n```";
    let v = parse_recommendations(text).unwrap();
    let recs = v["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[1]["subject"], "SQL");
  }

  #[test]
  fn recommendations_with_brackets_are_not_double_wrapped() {
    let v = parse_recommendations("[{\"subject\": \"Go\"}]").unwrap();
    assert_eq!(v["recommendations"].as_array().unwrap().len(), 1);
  }

  #[test]
  fn recommendations_garbage_is_malformed() {
    assert!(matches!(parse_recommendations("no idea"), Err(ApiError::MalformedResponse(_))));
  }

  #[test]
  fn domain_result_fills_defaults() {
    let v = domain_result("notes.pdf", "{\"domain\": \"Physics\"}").unwrap();
    assert_eq!(v["filename"], "notes.pdf");
    assert_eq!(v["domain"], "Physics");
    assert_eq!(v["subdomain"], "Unknown");
    assert_eq!(v["explanation"], "No explanation provided.");
  }

  #[test]
  fn string_list_skips_non_strings() {
    let obj = parse_json_object("{\"topicsCovered\": [\"a\", 1, \"b\"]}").unwrap();
    assert_eq!(string_list(&obj, "topicsCovered"), vec!["a", "b"]);
    assert!(string_list(&obj, "learningObjectives").is_empty());
  }
}
