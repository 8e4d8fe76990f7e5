//! Assessment and question models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Assessment database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub max_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Question database model
///
/// Four labeled options (A-D) with exactly one designated correct label.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
    pub position: i32,
}

impl Question {
    /// Compare a submitted option label against the stored correct label.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn is_correct_answer(&self, selected: &str) -> bool {
        selected.trim().eq_ignore_ascii_case(self.correct_option.trim())
    }
}

/// Question data for insertion (not yet persisted)
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
    pub position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> Question {
        Question {
            id: Uuid::new_v4(),
            assessment_id: Uuid::new_v4(),
            text: "What is 2 + 2?".to_string(),
            option_a: "3".to_string(),
            option_b: "4".to_string(),
            option_c: "5".to_string(),
            option_d: "6".to_string(),
            correct_option: correct.to_string(),
            position: 0,
        }
    }

    #[test]
    fn test_answer_matching_is_case_insensitive() {
        let q = question("B");
        assert!(q.is_correct_answer("B"));
        assert!(q.is_correct_answer("b"));
        assert!(!q.is_correct_answer("A"));
    }

    #[test]
    fn test_answer_matching_trims_whitespace() {
        let q = question("C");
        assert!(q.is_correct_answer("  c "));
        assert!(q.is_correct_answer("\tC\n"));
        assert!(!q.is_correct_answer("c c"));
    }
}
