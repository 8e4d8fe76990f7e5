//! Assessment result model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::PASS_MARK_RATIO;

/// A user's persisted outcome for one assessment.
///
/// At most one row exists per (assessment, user) pair; resubmission
/// overwrites score and timestamp in place.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub user_id: Uuid,
    pub score: i32,
    pub attempted_at: DateTime<Utc>,
}

impl AssessmentResult {
    /// Derived pass flag, recomputed on every read and never persisted.
    pub fn passed(&self, max_score: i32) -> bool {
        f64::from(self.score) >= PASS_MARK_RATIO * f64::from(max_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: i32) -> AssessmentResult {
        AssessmentResult {
            id: Uuid::new_v4(),
            assessment_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            score,
            attempted_at: Utc::now(),
        }
    }

    #[test]
    fn test_passed_at_threshold() {
        assert!(result(60).passed(100));
        assert!(result(75).passed(100));
        assert!(!result(59).passed(100));
    }

    #[test]
    fn test_passed_with_small_max_score() {
        // 1 of 3 correct, max 10: stored score 3 is below the 6.0 mark
        assert!(!result(3).passed(10));
        assert!(result(6).passed(10));
    }
}
