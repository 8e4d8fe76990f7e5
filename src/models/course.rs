//! Course and enrollment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Course database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub instructor_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Check whether the given user may administer this course
    pub fn is_managed_by(&self, user_id: &Uuid, role: &str) -> bool {
        self.instructor_id == *user_id || role == crate::constants::roles::ADMIN
    }
}

/// Enrollment of a user in a course
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
}
