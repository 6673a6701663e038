//! Rule-based proficiency classifier.
//!
//! A sample is `Advanced` when the score is high AND the time is short,
//! `Beginner` when the score is low OR the time is long, and `Intermediate`
//! otherwise. Disagreeing signals therefore always land on the lower label.
//!
//! Default thresholds (overridable through the `[level]` TOML table):
//!
//! | threshold            | default | meaning                              |
//! |----------------------|---------|--------------------------------------|
//! | `advanced_min_score` | 7.0     | score at or above counts as high     |
//! | `advanced_max_time`  | 80.0    | seconds at or below count as fast    |
//! | `beginner_max_score` | 3.0     | score at or below counts as low      |
//! | `beginner_min_time`  | 300.0   | seconds at or above count as slow    |
//!
//! On integer quiz scores this gives 0–3 Beginner, 4–6 Intermediate and 7+
//! Advanced when fast, e.g. `(8, 70)` is Advanced.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{PerformanceSample, ProficiencyLabel};
use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LevelPolicy {
  pub advanced_min_score: f64,
  pub advanced_max_time: f64,
  pub beginner_max_score: f64,
  pub beginner_min_time: f64,
}

impl Default for LevelPolicy {
  fn default() -> Self {
    Self {
      advanced_min_score: 7.0,
      advanced_max_time: 80.0,
      beginner_max_score: 3.0,
      beginner_min_time: 300.0,
    }
  }
}

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
  #[error("threshold `{0}` must be a finite number")]
  NonFinite(&'static str),

  #[error("beginner_max_score ({beginner}) must be below advanced_min_score ({advanced})")]
  ScoreBandsOverlap { beginner: f64, advanced: f64 },

  #[error("advanced_max_time ({advanced}) must be below beginner_min_time ({beginner})")]
  TimeBandsOverlap { advanced: f64, beginner: f64 },
}

impl LevelPolicy {
  /// Bands may not overlap, otherwise a sample could be both high and low.
  pub fn validate(&self) -> Result<(), PolicyError> {
    let fields = [
      ("advanced_min_score", self.advanced_min_score),
      ("advanced_max_time", self.advanced_max_time),
      ("beginner_max_score", self.beginner_max_score),
      ("beginner_min_time", self.beginner_min_time),
    ];
    if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
      return Err(PolicyError::NonFinite(*name));
    }
    if self.beginner_max_score >= self.advanced_min_score {
      return Err(PolicyError::ScoreBandsOverlap {
        beginner: self.beginner_max_score,
        advanced: self.advanced_min_score,
      });
    }
    if self.advanced_max_time >= self.beginner_min_time {
      return Err(PolicyError::TimeBandsOverlap {
        advanced: self.advanced_max_time,
        beginner: self.beginner_min_time,
      });
    }
    Ok(())
  }

  /// Total over every input; never fails.
  pub fn classify(&self, sample: &PerformanceSample) -> ProficiencyLabel {
    let PerformanceSample { score, time_taken } = *sample;
    if score >= self.advanced_min_score && time_taken <= self.advanced_max_time {
      ProficiencyLabel::Advanced
    } else if score <= self.beginner_max_score || time_taken >= self.beginner_min_time {
      ProficiencyLabel::Beginner
    } else {
      ProficiencyLabel::Intermediate
    }
  }
}

impl PerformanceSample {
  pub fn new(score: f64, time_taken: f64) -> Result<Self, ApiError> {
    if !score.is_finite() {
      return Err(ApiError::InvalidInput("field `score` must be a finite number".into()));
    }
    if !time_taken.is_finite() {
      return Err(ApiError::InvalidInput("field `time_taken` must be a finite number".into()));
    }
    Ok(Self { score, time_taken })
  }

  /// Build a sample from an untyped JSON body. Strings, nulls and booleans are
  /// rejected rather than coerced.
  pub fn from_json(body: &Value) -> Result<Self, ApiError> {
    let obj = body
      .as_object()
      .ok_or_else(|| ApiError::InvalidInput("request body must be a JSON object".into()))?;

    let field = |name: &str| -> Result<f64, ApiError> {
      match obj.get(name) {
        None => Err(ApiError::InvalidInput(format!("missing field `{name}`"))),
        Some(v) => v
          .as_f64()
          .ok_or_else(|| ApiError::InvalidInput(format!("field `{name}` must be a number"))),
      }
    };

    Self::new(field("score")?, field("time_taken")?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn label(score: f64, time_taken: f64) -> ProficiencyLabel {
    LevelPolicy::default().classify(&PerformanceSample { score, time_taken })
  }

  #[test]
  fn worked_example_is_advanced() {
    assert_eq!(label(8.0, 70.0), ProficiencyLabel::Advanced);
  }

  #[test]
  fn default_bands_on_integer_scores() {
    for s in 0..=3 {
      assert_eq!(label(s as f64, 60.0), ProficiencyLabel::Beginner, "score {s}");
    }
    for s in 4..=6 {
      assert_eq!(label(s as f64, 60.0), ProficiencyLabel::Intermediate, "score {s}");
    }
    for s in 7..=9 {
      assert_eq!(label(s as f64, 60.0), ProficiencyLabel::Advanced, "score {s}");
    }
  }

  #[test]
  fn boundaries_are_inclusive() {
    assert_eq!(label(7.0, 80.0), ProficiencyLabel::Advanced);
    assert_eq!(label(7.0, 80.5), ProficiencyLabel::Intermediate);
    assert_eq!(label(3.0, 10.0), ProficiencyLabel::Beginner);
    assert_eq!(label(5.0, 300.0), ProficiencyLabel::Beginner);
    assert_eq!(label(5.0, 299.0), ProficiencyLabel::Intermediate);
  }

  #[test]
  fn disagreeing_signals_take_the_lower_label() {
    // high score, slow
    assert_eq!(label(9.0, 120.0), ProficiencyLabel::Intermediate);
    assert_eq!(label(9.0, 400.0), ProficiencyLabel::Beginner);
    // low score, fast
    assert_eq!(label(1.0, 5.0), ProficiencyLabel::Beginner);
  }

  #[test]
  fn out_of_range_values_are_classified_not_rejected() {
    assert_eq!(label(-4.0, 10.0), ProficiencyLabel::Beginner);
    assert_eq!(label(150.0, 0.0), ProficiencyLabel::Advanced);
    assert_eq!(label(150.0, -20.0), ProficiencyLabel::Advanced);
    assert_eq!(label(5.0, 1e9), ProficiencyLabel::Beginner);
  }

  #[test]
  fn deterministic_across_calls() {
    let policy = LevelPolicy::default();
    let sample = PerformanceSample { score: 6.5, time_taken: 95.0 };
    let first = policy.classify(&sample);
    for _ in 0..100 {
      assert_eq!(policy.classify(&sample), first);
    }
  }

  #[test]
  fn lowering_score_never_raises_the_label() {
    let policy = LevelPolicy::default();
    for time in [0.0, 40.0, 70.0, 80.0, 150.0, 299.9, 300.0, 1000.0] {
      let mut prev = ProficiencyLabel::Advanced;
      let mut score = 12.0;
      while score >= -2.0 {
        let l = policy.classify(&PerformanceSample { score, time_taken: time });
        assert!(l <= prev, "score {score} time {time}: {l} above {prev}");
        prev = l;
        score -= 0.25;
      }
    }
  }

  #[test]
  fn raising_time_never_raises_the_label() {
    let policy = LevelPolicy::default();
    for score in [0.0, 3.0, 4.0, 6.9, 7.0, 10.0] {
      let mut prev = ProficiencyLabel::Advanced;
      let mut time = 0.0;
      while time <= 500.0 {
        let l = policy.classify(&PerformanceSample { score, time_taken: time });
        assert!(l <= prev, "score {score} time {time}");
        prev = l;
        time += 5.0;
      }
    }
  }

  #[test]
  fn custom_policy_is_honoured() {
    let policy = LevelPolicy {
      advanced_min_score: 90.0,
      advanced_max_time: 600.0,
      beginner_max_score: 50.0,
      beginner_min_time: 1800.0,
    };
    assert!(policy.validate().is_ok());
    let s = |score, time_taken| PerformanceSample { score, time_taken };
    assert_eq!(policy.classify(&s(95.0, 500.0)), ProficiencyLabel::Advanced);
    assert_eq!(policy.classify(&s(70.0, 500.0)), ProficiencyLabel::Intermediate);
    assert_eq!(policy.classify(&s(8.0, 70.0)), ProficiencyLabel::Beginner);
  }

  #[test]
  fn overlapping_policies_are_rejected() {
    let mut p = LevelPolicy::default();
    p.beginner_max_score = 7.0;
    assert!(matches!(p.validate(), Err(PolicyError::ScoreBandsOverlap { .. })));

    let mut p = LevelPolicy::default();
    p.beginner_min_time = 80.0;
    assert!(matches!(p.validate(), Err(PolicyError::TimeBandsOverlap { .. })));

    let mut p = LevelPolicy::default();
    p.advanced_max_time = f64::INFINITY;
    assert_eq!(p.validate(), Err(PolicyError::NonFinite("advanced_max_time")));
  }

  #[test]
  fn sample_from_json_accepts_integers_and_floats() {
    let s = PerformanceSample::from_json(&json!({"score": 8, "time_taken": 70.5})).unwrap();
    assert_eq!(s, PerformanceSample { score: 8.0, time_taken: 70.5 });
  }

  #[test]
  fn sample_from_json_rejects_missing_fields() {
    let err = PerformanceSample::from_json(&json!({"score": 8})).unwrap_err();
    assert!(matches!(&err, ApiError::InvalidInput(m) if m == "missing field `time_taken`"));
    let err = PerformanceSample::from_json(&json!({"time_taken": 8})).unwrap_err();
    assert!(matches!(&err, ApiError::InvalidInput(m) if m == "missing field `score`"));
  }

  #[test]
  fn sample_from_json_rejects_non_numeric_fields() {
    for body in [
      json!({"score": "8", "time_taken": 70}),
      json!({"score": null, "time_taken": 70}),
      json!({"score": 8, "time_taken": true}),
      json!({"score": 8, "time_taken": [70]}),
    ] {
      let err = PerformanceSample::from_json(&body).unwrap_err();
      assert!(matches!(err, ApiError::InvalidInput(_)), "{body}");
    }
  }

  #[test]
  fn sample_from_json_rejects_non_objects() {
    assert!(PerformanceSample::from_json(&json!([8, 70])).is_err());
  }

  #[test]
  fn non_finite_samples_are_rejected() {
    assert!(PerformanceSample::new(f64::NAN, 10.0).is_err());
    assert!(PerformanceSample::new(5.0, f64::NEG_INFINITY).is_err());
  }
}
