//! Course response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Full course detail response
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub instructor_id: Uuid,
    pub instructor_name: String,
    pub enrollment_count: i64,
    pub assessment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Brief course info for listings
#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
    pub instructor_id: Uuid,
    pub enrollment_count: i64,
    pub assessment_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Course list response
#[derive(Debug, Serialize)]
pub struct CoursesListResponse {
    pub courses: Vec<CourseSummary>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Enrollment confirmation response
#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    pub message: String,
    pub course_id: Uuid,
    pub course_title: String,
    pub enrolled_at: DateTime<Utc>,
}

/// One enrolled user in an enrollment listing
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct EnrollmentEntry {
    pub user_id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub enrolled_at: DateTime<Utc>,
}

/// Enrollment list response
#[derive(Debug, Serialize)]
pub struct EnrollmentsListResponse {
    pub enrollments: Vec<EnrollmentEntry>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
