//! Submission and result response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Outcome of a scored submission
///
/// `score` is the rounded float value; the persisted score is its integer
/// truncation and may differ in the decimals.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub score: f64,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub max_score: i32,
    pub is_update: bool,
}

/// A user's persisted result with the derived pass flag
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub user_id: Uuid,
    pub score: i32,
    pub max_score: i32,
    pub passed: bool,
    pub attempted_at: DateTime<Utc>,
}

/// One row in an instructor's result listing
#[derive(Debug, Serialize)]
pub struct ResultEntry {
    pub user_id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub score: i32,
    pub passed: bool,
    pub attempted_at: DateTime<Utc>,
}

/// All results for an assessment
#[derive(Debug, Serialize)]
pub struct AssessmentResultsResponse {
    pub assessment_id: Uuid,
    pub max_score: i32,
    pub results: Vec<ResultEntry>,
}
