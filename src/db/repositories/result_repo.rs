//! Assessment result repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::AssessmentResult};

/// Repository for assessment result database operations
pub struct ResultRepository;

impl ResultRepository {
    /// Insert or update the result for (assessment, user) in a single statement.
    ///
    /// The unique constraint on (assessment_id, user_id) makes this safe under
    /// concurrent submissions from the same user; there is deliberately no
    /// separate existence check. DO UPDATE preserves the existing row id, so a
    /// returned id that differs from the freshly generated candidate means the
    /// row was updated rather than inserted.
    pub async fn upsert(
        pool: &PgPool,
        assessment_id: &Uuid,
        user_id: &Uuid,
        score: i32,
        attempted_at: DateTime<Utc>,
    ) -> AppResult<(AssessmentResult, bool)> {
        let candidate_id = Uuid::new_v4();

        let result = sqlx::query_as::<_, AssessmentResult>(
            r#"
            INSERT INTO assessment_results (id, assessment_id, user_id, score, attempted_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (assessment_id, user_id)
            DO UPDATE SET score = EXCLUDED.score, attempted_at = EXCLUDED.attempted_at
            RETURNING *
            "#,
        )
        .bind(candidate_id)
        .bind(assessment_id)
        .bind(user_id)
        .bind(score)
        .bind(attempted_at)
        .fetch_one(pool)
        .await?;

        let is_update = result.id != candidate_id;

        Ok((result, is_update))
    }

    /// Find a user's result for an assessment
    pub async fn find_by_assessment_and_user(
        pool: &PgPool,
        assessment_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<AssessmentResult>> {
        let result = sqlx::query_as::<_, AssessmentResult>(
            r#"SELECT * FROM assessment_results WHERE assessment_id = $1 AND user_id = $2"#,
        )
        .bind(assessment_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(result)
    }
}
