//! Assessment response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Question as seen by assessment authors (includes the correct option)
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: Uuid,
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
}

/// Question as seen by students (correct option hidden)
#[derive(Debug, Serialize)]
pub struct PublicQuestionResponse {
    pub id: Uuid,
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
}

/// Authoring view of an assessment
#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub max_score: i32,
    pub questions: Vec<QuestionResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of an assessment
#[derive(Debug, Serialize)]
pub struct AssessmentDetailResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub max_score: i32,
    pub questions: Vec<PublicQuestionResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Brief assessment info for course listings
#[derive(Debug, Serialize)]
pub struct AssessmentSummary {
    pub id: Uuid,
    pub title: String,
    pub max_score: i32,
    pub question_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Assessment list response
#[derive(Debug, Serialize)]
pub struct AssessmentsListResponse {
    pub assessments: Vec<AssessmentSummary>,
}
