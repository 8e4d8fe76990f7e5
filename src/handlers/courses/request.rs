//! Course request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create course request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[validate(length(max = 65535))]
    pub description: Option<String>,
}

/// Update course request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,

    #[validate(length(max = 65535))]
    pub description: Option<String>,
}

/// List courses query parameters
#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub instructor_id: Option<Uuid>,
}

/// Pagination query for enrollment listings
#[derive(Debug, Deserialize)]
pub struct ListEnrollmentsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
