//! Assessment submission and scoring
//!
//! Implements the submission workflow: validate the answer set against the
//! assessment's questions, compute the percentage-based score, and upsert
//! the caller's result row.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{AssessmentRepository, CourseRepository, ResultRepository},
    error::{AppError, AppResult},
    handlers::results::{
        request::SubmittedAnswer,
        response::{AssessmentResultsResponse, ResultEntry, ResultResponse, SubmissionResponse},
    },
    models::Question,
};

/// Outcome of scoring one answer set against an assessment's questions
struct ScoreBreakdown {
    correct_count: usize,
    total_questions: usize,
    /// Percentage-based score rounded to two decimal places
    final_score: f64,
}

/// Scoring service
pub struct ScoringService;

impl ScoringService {
    /// Score a submission and upsert the caller's result.
    ///
    /// Validation is fail-fast: empty answer set, unknown assessment, then
    /// the exactly-once answer contract, in that order. The caller identity
    /// is always an explicit parameter.
    pub async fn submit(
        pool: &PgPool,
        assessment_id: &Uuid,
        user_id: &Uuid,
        answers: &[SubmittedAnswer],
    ) -> AppResult<SubmissionResponse> {
        if answers.is_empty() {
            return Err(AppError::Validation("No answers submitted".to_string()));
        }

        let assessment = AssessmentRepository::find_by_id(pool, assessment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))?;

        if !CourseRepository::is_enrolled(pool, &assessment.course_id, user_id).await? {
            return Err(AppError::Forbidden(
                "Must be enrolled in the course to submit".to_string(),
            ));
        }

        let questions = AssessmentRepository::list_questions(pool, assessment_id).await?;

        let selected = Self::index_answers(&questions, answers)?;
        let breakdown = Self::score(&questions, &selected, assessment.max_score);

        // Stored score is the integer truncation; the response carries the
        // rounded float (see DESIGN.md).
        let stored_score = breakdown.final_score.trunc() as i32;

        let (result, is_update) =
            ResultRepository::upsert(pool, assessment_id, user_id, stored_score, Utc::now())
                .await?;

        tracing::info!(
            assessment_id = %assessment_id,
            user_id = %user_id,
            result_id = %result.id,
            score = breakdown.final_score,
            correct = breakdown.correct_count,
            total = breakdown.total_questions,
            is_update,
            "Assessment submission scored"
        );

        Ok(SubmissionResponse {
            score: breakdown.final_score,
            total_questions: breakdown.total_questions as u32,
            correct_answers: breakdown.correct_count as u32,
            max_score: assessment.max_score,
            is_update,
        })
    }

    /// Get the caller's persisted result for an assessment
    pub async fn get_my_result(
        pool: &PgPool,
        assessment_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<ResultResponse> {
        let assessment = AssessmentRepository::find_by_id(pool, assessment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))?;

        let result = ResultRepository::find_by_assessment_and_user(pool, assessment_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No result for this assessment".to_string()))?;

        let passed = result.passed(assessment.max_score);

        Ok(ResultResponse {
            id: result.id,
            assessment_id: result.assessment_id,
            user_id: result.user_id,
            score: result.score,
            max_score: assessment.max_score,
            passed,
            attempted_at: result.attempted_at,
        })
    }

    /// List all results for an assessment (course owner or admin only)
    pub async fn list_results(
        pool: &PgPool,
        assessment_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<AssessmentResultsResponse> {
        let assessment = AssessmentRepository::find_by_id(pool, assessment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))?;

        let course = CourseRepository::find_by_id(pool, &assessment.course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !course.is_managed_by(requester_id, requester_role) {
            return Err(AppError::Forbidden(
                "Cannot view results for other instructors' courses".to_string(),
            ));
        }

        let rows = sqlx::query_as::<_, ResultRow>(
            r#"
            SELECT
                r.user_id,
                u.username,
                u.display_name,
                r.score,
                r.attempted_at
            FROM assessment_results r
            JOIN users u ON r.user_id = u.id
            WHERE r.assessment_id = $1
            ORDER BY r.score DESC, r.attempted_at
            "#,
        )
        .bind(assessment_id)
        .fetch_all(pool)
        .await?;

        let max_score = assessment.max_score;
        let results = rows
            .into_iter()
            .map(|row| ResultEntry {
                user_id: row.user_id,
                username: row.username,
                display_name: row.display_name,
                score: row.score,
                passed: f64::from(row.score)
                    >= crate::constants::PASS_MARK_RATIO * f64::from(max_score),
                attempted_at: row.attempted_at,
            })
            .collect();

        Ok(AssessmentResultsResponse {
            assessment_id: *assessment_id,
            max_score,
            results,
        })
    }

    /// Map question id to selected label, enforcing the exactly-once contract.
    ///
    /// Every question of the assessment must appear exactly once among the
    /// submitted answers; answers for unknown questions, duplicated answers,
    /// and unanswered questions are all rejected with the offending ids named.
    fn index_answers(
        questions: &[Question],
        answers: &[SubmittedAnswer],
    ) -> AppResult<HashMap<Uuid, String>> {
        let known: HashSet<Uuid> = questions.iter().map(|q| q.id).collect();

        let mut selected: HashMap<Uuid, String> = HashMap::with_capacity(answers.len());
        let mut unknown = Vec::new();
        let mut duplicated = Vec::new();

        for answer in answers {
            if !known.contains(&answer.question_id) {
                unknown.push(answer.question_id);
            } else if selected
                .insert(answer.question_id, answer.selected_option.clone())
                .is_some()
            {
                duplicated.push(answer.question_id);
            }
        }

        if !unknown.is_empty() {
            return Err(AppError::Validation(format!(
                "Answers reference questions outside this assessment: {}",
                join_ids(&unknown)
            )));
        }

        if !duplicated.is_empty() {
            return Err(AppError::Validation(format!(
                "Multiple answers submitted for questions: {}",
                join_ids(&duplicated)
            )));
        }

        let missing: Vec<Uuid> = questions
            .iter()
            .map(|q| q.id)
            .filter(|id| !selected.contains_key(id))
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Unanswered questions: {}",
                join_ids(&missing)
            )));
        }

        Ok(selected)
    }

    /// Compute the percentage-based score for a complete answer set.
    fn score(
        questions: &[Question],
        selected: &HashMap<Uuid, String>,
        max_score: i32,
    ) -> ScoreBreakdown {
        let total_questions = questions.len();

        let correct_count = questions
            .iter()
            .filter(|q| {
                selected
                    .get(&q.id)
                    .is_some_and(|answer| q.is_correct_answer(answer))
            })
            .count();

        let raw = correct_count as f64 / total_questions as f64 * f64::from(max_score);
        let final_score = (raw * 100.0).round() / 100.0;

        ScoreBreakdown {
            correct_count,
            total_questions,
            final_score,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ResultRow {
    user_id: Uuid,
    username: String,
    display_name: Option<String>,
    score: i32,
    attempted_at: chrono::DateTime<chrono::Utc>,
}

fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> Question {
        Question {
            id: Uuid::new_v4(),
            assessment_id: Uuid::new_v4(),
            text: "q".to_string(),
            option_a: "first".to_string(),
            option_b: "second".to_string(),
            option_c: "third".to_string(),
            option_d: "fourth".to_string(),
            correct_option: correct.to_string(),
            position: 0,
        }
    }

    fn answers_for(questions: &[Question], labels: &[&str]) -> Vec<SubmittedAnswer> {
        questions
            .iter()
            .zip(labels)
            .map(|(q, label)| SubmittedAnswer {
                question_id: q.id,
                selected_option: label.to_string(),
            })
            .collect()
    }

    fn selected_map(answers: &[SubmittedAnswer]) -> HashMap<Uuid, String> {
        answers
            .iter()
            .map(|a| (a.question_id, a.selected_option.clone()))
            .collect()
    }

    #[test]
    fn test_fully_correct_submission_scores_max() {
        let questions = vec![question("A"), question("B"), question("C"), question("D")];
        let answers = answers_for(&questions, &["A", "B", "C", "D"]);

        let breakdown = ScoringService::score(&questions, &selected_map(&answers), 100);

        assert_eq!(breakdown.correct_count, 4);
        assert_eq!(breakdown.total_questions, 4);
        assert_eq!(breakdown.final_score, 100.0);
    }

    #[test]
    fn test_fully_incorrect_submission_scores_zero() {
        let questions = vec![question("A"), question("A"), question("A")];
        let answers = answers_for(&questions, &["B", "C", "D"]);

        let breakdown = ScoringService::score(&questions, &selected_map(&answers), 50);

        assert_eq!(breakdown.correct_count, 0);
        assert_eq!(breakdown.final_score, 0.0);
    }

    #[test]
    fn test_three_of_four_correct() {
        // 4 questions, max 100, 3 correct: 75.0
        let questions = vec![question("A"), question("B"), question("C"), question("D")];
        let answers = answers_for(&questions, &["A", "B", "C", "A"]);

        let breakdown = ScoringService::score(&questions, &selected_map(&answers), 100);

        assert_eq!(breakdown.correct_count, 3);
        assert_eq!(breakdown.final_score, 75.0);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 3 questions, max 10, 1 correct: 3.3333... rounds to 3.33
        let questions = vec![question("A"), question("B"), question("C")];
        let answers = answers_for(&questions, &["A", "C", "D"]);

        let breakdown = ScoringService::score(&questions, &selected_map(&answers), 10);

        assert_eq!(breakdown.correct_count, 1);
        assert_eq!(breakdown.final_score, 3.33);
        // The stored score is the integer truncation
        assert_eq!(breakdown.final_score.trunc() as i32, 3);
    }

    #[test]
    fn test_matching_ignores_case_and_whitespace() {
        let questions = vec![question("B"), question("C")];
        let answers = answers_for(&questions, &[" b ", "c"]);

        let breakdown = ScoringService::score(&questions, &selected_map(&answers), 10);

        assert_eq!(breakdown.correct_count, 2);
        assert_eq!(breakdown.final_score, 10.0);
    }

    #[test]
    fn test_index_answers_accepts_complete_set() {
        let questions = vec![question("A"), question("B")];
        let answers = answers_for(&questions, &["A", "B"]);

        let selected = ScoringService::index_answers(&questions, &answers).unwrap();

        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_index_answers_rejects_missing_question() {
        let questions = vec![question("A"), question("B")];
        let answers = answers_for(&questions[..1], &["A"]);

        let err = ScoringService::index_answers(&questions, &answers).unwrap_err();

        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("Unanswered questions"));
                assert!(msg.contains(&questions[1].id.to_string()));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_index_answers_rejects_duplicates() {
        let questions = vec![question("A")];
        let mut answers = answers_for(&questions, &["A"]);
        answers.push(SubmittedAnswer {
            question_id: questions[0].id,
            selected_option: "B".to_string(),
        });

        let err = ScoringService::index_answers(&questions, &answers).unwrap_err();

        match err {
            AppError::Validation(msg) => assert!(msg.contains("Multiple answers")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_index_answers_rejects_unknown_question() {
        let questions = vec![question("A")];
        let mut answers = answers_for(&questions, &["A"]);
        answers.push(SubmittedAnswer {
            question_id: Uuid::new_v4(),
            selected_option: "B".to_string(),
        });

        let err = ScoringService::index_answers(&questions, &answers).unwrap_err();

        match err {
            AppError::Validation(msg) => assert!(msg.contains("outside this assessment")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
