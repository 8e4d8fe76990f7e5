//! Assessment request DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::utils::validation::normalize_option_label;

/// Question data in authoring requests
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct QuestionInput {
    #[validate(length(min = 1, max = 1000))]
    pub text: String,

    #[validate(length(min = 1, max = 500))]
    pub option_a: String,

    #[validate(length(min = 1, max = 500))]
    pub option_b: String,

    #[validate(length(min = 1, max = 500))]
    pub option_c: String,

    #[validate(length(min = 1, max = 500))]
    pub option_d: String,

    /// Label of the correct option (A-D, case-insensitive)
    #[validate(custom(function = validate_correct_option))]
    pub correct_option: String,
}

/// Create assessment request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssessmentRequest {
    pub course_id: Uuid,

    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[validate(range(min = 1))]
    pub max_score: i32,

    #[validate(length(min = 1), nested)]
    pub questions: Vec<QuestionInput>,
}

/// Update assessment request
///
/// When `questions` is present the full question set is replaced.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAssessmentRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,

    #[validate(range(min = 1))]
    pub max_score: Option<i32>,

    #[validate(length(min = 1), nested)]
    pub questions: Option<Vec<QuestionInput>>,
}

fn validate_correct_option(label: &str) -> Result<(), ValidationError> {
    if normalize_option_label(label).is_none() {
        return Err(ValidationError::new("correct_option_must_be_a_to_d"));
    }
    Ok(())
}
