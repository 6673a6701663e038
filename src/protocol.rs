//! Public HTTP request/response DTOs (serde ready).
//! Course endpoints take `domain::CourseRequest` directly; the AI-backed
//! responses are free-form JSON built in `logic`.

use serde::{Deserialize, Serialize};

use crate::domain::ProficiencyLabel;

#[derive(Deserialize)]
pub struct DoubtIn {
    pub ques: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationIn {
    pub student_level: String,
    pub course: String,
}

#[derive(Debug, Deserialize)]
pub struct FileIn {
    pub file_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LevelOut {
    pub level: ProficiencyLabel,
}

#[derive(Serialize)]
pub struct IndexOut {
    pub message: &'static str,
    pub endpoints: &'static [&'static str],
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
