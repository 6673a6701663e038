//! Prompt templates for every AI-backed endpoint and the pure functions that
//! render them. Nothing here touches the network, so rendered prompts can be
//! asserted on directly.
//!
//! Placeholders use `{name}`; literal JSON braces in the templates are kept
//! as-is by `fill_template`.

use serde::Deserialize;

use crate::domain::CourseRequest;
use crate::util::fill_template;

/// Prompt templates. Defaults match the production tone; any field can be
/// overridden from the `[prompts]` TOML table.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub course_structure: String,
  pub unit_structure: String,
  pub unit_content: String,
  pub unit_title: String,
  pub unit_mcqs: String,
  pub doubt_chatbot: String,
  pub course_recommendation: String,
  pub domain_detection: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      course_structure: r#"Generate a comprehensive course structure for {subject} with exactly {units} units.
Focus area: {focus_area}
Difficulty: {difficulty}

Return ONLY unit titles in this JSON format:
{
    "courseTitle": "",
    "difficultyLevel": "",
    "description": "",
    "prerequisites": ["prerequisite 1", "prerequisite 2"],
    "learningOutcomes": ["outcome 1", "outcome 2"],
    "units": [
        {
            "unitTitle": "",
            "unitDescription": ""
        }
    ],
    "overview": "",
    "assessmentMethods": ["method 1", "method 2"]
}"#
      .into(),
      unit_structure: r#"Generate a detailed unit structure for "{unit_title}" in {subject} course.
Difficulty level: {difficulty}
Focus area: {focus_area}

Return the response in this JSON format:
{
    "unitTitle": "{unit_title}",
    "learningObjectives": ["detailed objective 1", "detailed objective 2"],
    "topicsCovered": ["detailed topic 1", "detailed topic 2"],
    "resources": ["resource 1", "resource 2"],
    "estimatedDuration": "X weeks"
}

Ensure content matches the difficulty level and focuses on practical applications."#
        .into(),
      unit_content: r#"Generate detailed educational content for the unit "{unit_title}" in {subject}.
Topics to cover: {topics}
Learning objectives: {objectives}
Difficulty level: {difficulty}
Focus area: {focus_area}

Return the response in this JSON format:
{
    "topicContents": [
        {
            "topic": "Topic Name",
            "content": "Detailed explanation and educational content",
            "examples": ["example 1", "example 2"],
            "exercises": ["exercise 1", "exercise 2"]
        }
    ]
}

Ensure content is practical and matches the specified difficulty level.
Give the content in about minimum 6000 words."#
        .into(),
      unit_title: r#"Generate a detailed unit structure for "{unit_title}" in {subject} course.
Difficulty level: {difficulty}
Focus area: {focus_area}

Return the response in this JSON format:
{
    "unitTitle": "{unit_title}"
}

Ensure content matches the difficulty level and focuses on practical applications."#
        .into(),
      unit_mcqs: r#"Generate Multiple Choice Questions (MCQs) for the unit "{unit_title}" in {subject}.
Difficulty level: {difficulty}
Focus area: {focus_area}

Return the response in this JSON format:
{
    "unitAssessment": [
        {
            "topic": "Topic Name",
            "questions": [
                {
                    "questionId": "unique_id",
                    "question": "Question text",
                    "options": ["Option A", "Option B", "Option C", "Option D"],
                    "correctAnswer": "Correct option",
                    "explanation": "Explanation of the correct answer"
                }
            ]
        }
    ]
}

Generate at least 3 MCQs per topic, and only 3 topics, ensuring they match the difficulty level."#
        .into(),
      doubt_chatbot: "You are a doubt chatbot for students and you have to resolve students doubts. The question is: {question}".into(),
      course_recommendation: r#"You are an intelligent assistant specializing in educational course recommendations.
Based on the student's level and the specified course, recommend 4 appropriate courses with the following details:
Subject, Number of Units, Focus Area, and Difficulty Level. Respond in JSON format.

Input:
1. Student Level: {student_level}
2. Course: {course}

Output:
    {"subject": "Python", "units": 3, "focus_area": "Python Basics", "difficulty": "Beginner"},
    {"subject": "Data Structures", "units": 3, "focus_area": "Arrays and Linked Lists", "difficulty": "Intermediate"},
    {"subject": "Algorithms", "units": 3, "focus_area": "Sorting and Searching", "difficulty": "Intermediate"},
    {"subject": "Advanced Python", "units": 3, "focus_area": "Python for Data Science", "difficulty": "Advanced"}"#
        .into(),
      domain_detection: r#"Analyze the following educational content and determine its subject domain (e.g., Mathematics, Physics, Biology, History, etc.)
and subdomain (if applicable). Provide a brief explanation for why you classified it as that domain and subdomain.
Format your response as JSON with three fields: 'domain', 'subdomain', and 'explanation'.

Content: {content}"#
        .into(),
    }
  }
}

impl Prompts {
  pub fn course_structure(&self, req: &CourseRequest) -> String {
    let units = req.units.to_string();
    fill_template(
      &self.course_structure,
      &[
        ("subject", req.subject.as_str()),
        ("units", units.as_str()),
        ("focus_area", req.focus_area.as_str()),
        ("difficulty", req.difficulty.as_str()),
      ],
    )
  }

  pub fn unit_structure(&self, unit_title: &str, req: &CourseRequest) -> String {
    self.unit_scoped(&self.unit_structure, unit_title, req)
  }

  pub fn unit_title(&self, unit_title: &str, req: &CourseRequest) -> String {
    self.unit_scoped(&self.unit_title, unit_title, req)
  }

  pub fn unit_mcqs(&self, unit_title: &str, req: &CourseRequest) -> String {
    self.unit_scoped(&self.unit_mcqs, unit_title, req)
  }

  pub fn unit_content(
    &self,
    unit_title: &str,
    topics: &[String],
    objectives: &[String],
    req: &CourseRequest,
  ) -> String {
    let topics = topics.join(", ");
    let objectives = objectives.join(", ");
    fill_template(
      &self.unit_content,
      &[
        ("unit_title", unit_title),
        ("subject", req.subject.as_str()),
        ("topics", topics.as_str()),
        ("objectives", objectives.as_str()),
        ("difficulty", req.difficulty.as_str()),
        ("focus_area", req.focus_area.as_str()),
      ],
    )
  }

  pub fn doubt_chatbot(&self, question: &str) -> String {
    fill_template(&self.doubt_chatbot, &[("question", question)])
  }

  pub fn course_recommendation(&self, student_level: &str, course: &str) -> String {
    fill_template(
      &self.course_recommendation,
      &[("student_level", student_level), ("course", course)],
    )
  }

  pub fn domain_detection(&self, content: &str) -> String {
    fill_template(&self.domain_detection, &[("content", content)])
  }

  fn unit_scoped(&self, tpl: &str, unit_title: &str, req: &CourseRequest) -> String {
    fill_template(
      tpl,
      &[
        ("unit_title", unit_title),
        ("subject", req.subject.as_str()),
        ("difficulty", req.difficulty.as_str()),
        ("focus_area", req.focus_area.as_str()),
      ],
    )
  }
}
