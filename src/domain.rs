//! Domain models: performance samples, proficiency labels and course requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred skill level. Variant order is the label order, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProficiencyLabel {
  Beginner,
  Intermediate,
  Advanced,
}

impl ProficiencyLabel {
  pub fn as_str(&self) -> &'static str {
    match self {
      ProficiencyLabel::Beginner => "Beginner",
      ProficiencyLabel::Intermediate => "Intermediate",
      ProficiencyLabel::Advanced => "Advanced",
    }
  }
}

impl fmt::Display for ProficiencyLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One quiz outcome submitted for classification. Lives for a single request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceSample {
  pub score: f64,
  /// Seconds spent on the assessment.
  pub time_taken: f64,
}

/// Requested course difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub fn as_str(&self) -> &'static str {
    match self {
      Difficulty::Easy => "easy",
      Difficulty::Medium => "medium",
      Difficulty::Hard => "hard",
    }
  }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

pub const MIN_UNITS: u32 = 1;
pub const MAX_UNITS: u32 = 10;

/// Input of both course generation and MCQ generation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CourseRequest {
  pub subject: String,
  pub difficulty: Difficulty,
  pub focus_area: String,
  pub units: u32,
}

impl CourseRequest {
  pub fn units_in_range(&self) -> bool {
    (MIN_UNITS..=MAX_UNITS).contains(&self.units)
  }
}

/// A single hit from the video-search collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
  pub title: String,
  pub url: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn labels_are_ordered_lowest_first() {
    assert!(ProficiencyLabel::Beginner < ProficiencyLabel::Intermediate);
    assert!(ProficiencyLabel::Intermediate < ProficiencyLabel::Advanced);
  }

  #[test]
  fn label_surface_text_is_stable() {
    assert_eq!(serde_json::to_string(&ProficiencyLabel::Advanced).unwrap(), "\"Advanced\"");
    assert_eq!(ProficiencyLabel::Intermediate.to_string(), "Intermediate");
  }

  #[test]
  fn difficulty_parses_lowercase_only() {
    let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
    assert_eq!(d, Difficulty::Medium);
    assert!(serde_json::from_str::<Difficulty>("\"Medium\"").is_err());
  }

  #[test]
  fn units_range_is_inclusive() {
    let mut req = CourseRequest {
      subject: "Rust".into(),
      difficulty: Difficulty::Easy,
      focus_area: "ownership".into(),
      units: 1,
    };
    assert!(req.units_in_range());
    req.units = 10;
    assert!(req.units_in_range());
    req.units = 0;
    assert!(!req.units_in_range());
    req.units = 11;
    assert!(!req.units_in_range());
  }
}
