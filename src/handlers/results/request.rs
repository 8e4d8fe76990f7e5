//! Submission request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// One answer in a submission
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: Uuid,

    /// Selected option label (free text, matched case-insensitively)
    pub selected_option: String,
}

/// Assessment submission request
#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub answers: Vec<SubmittedAnswer>,
}
