//! Assessment and question repository

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Assessment, NewQuestion, Question},
};

/// Repository for assessment database operations
pub struct AssessmentRepository;

impl AssessmentRepository {
    /// Create an assessment together with its questions in one transaction
    pub async fn create_with_questions(
        pool: &PgPool,
        course_id: &Uuid,
        title: &str,
        max_score: i32,
        questions: &[NewQuestion],
    ) -> AppResult<Assessment> {
        let mut tx = pool.begin().await?;

        let assessment = sqlx::query_as::<_, Assessment>(
            r#"
            INSERT INTO assessments (course_id, title, max_score)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(course_id)
        .bind(title)
        .bind(max_score)
        .fetch_one(&mut *tx)
        .await?;

        Self::insert_questions(&mut tx, &assessment.id, questions).await?;

        tx.commit().await?;

        Ok(assessment)
    }

    /// Find assessment by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Assessment>> {
        let assessment =
            sqlx::query_as::<_, Assessment>(r#"SELECT * FROM assessments WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(assessment)
    }

    /// Update assessment metadata, optionally replacing all questions
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        max_score: Option<i32>,
        questions: Option<&[NewQuestion]>,
    ) -> AppResult<Assessment> {
        let mut tx = pool.begin().await?;

        let assessment = sqlx::query_as::<_, Assessment>(
            r#"
            UPDATE assessments
            SET
                title = COALESCE($2, title),
                max_score = COALESCE($3, max_score),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(max_score)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(questions) = questions {
            sqlx::query(r#"DELETE FROM questions WHERE assessment_id = $1"#)
                .bind(id)
                .execute(&mut *tx)
                .await?;

            Self::insert_questions(&mut tx, id, questions).await?;
        }

        tx.commit().await?;

        Ok(assessment)
    }

    /// Delete assessment (questions and results cascade)
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM assessments WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List assessments belonging to a course
    pub async fn list_by_course(pool: &PgPool, course_id: &Uuid) -> AppResult<Vec<Assessment>> {
        let assessments = sqlx::query_as::<_, Assessment>(
            r#"SELECT * FROM assessments WHERE course_id = $1 ORDER BY created_at"#,
        )
        .bind(course_id)
        .fetch_all(pool)
        .await?;

        Ok(assessments)
    }

    /// Count assessments belonging to a course
    pub async fn count_by_course(pool: &PgPool, course_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM assessments WHERE course_id = $1"#)
                .bind(course_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// List questions of an assessment in authored order
    pub async fn list_questions(pool: &PgPool, assessment_id: &Uuid) -> AppResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"SELECT * FROM questions WHERE assessment_id = $1 ORDER BY position"#,
        )
        .bind(assessment_id)
        .fetch_all(pool)
        .await?;

        Ok(questions)
    }

    /// Count questions of an assessment
    pub async fn question_count(pool: &PgPool, assessment_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM questions WHERE assessment_id = $1"#)
                .bind(assessment_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    async fn insert_questions(
        tx: &mut Transaction<'_, Postgres>,
        assessment_id: &Uuid,
        questions: &[NewQuestion],
    ) -> AppResult<()> {
        for question in questions {
            sqlx::query(
                r#"
                INSERT INTO questions (
                    assessment_id, text, option_a, option_b, option_c, option_d,
                    correct_option, position
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(assessment_id)
            .bind(&question.text)
            .bind(&question.option_a)
            .bind(&question.option_b)
            .bind(&question.option_c)
            .bind(&question.option_d)
            .bind(&question.correct_option)
            .bind(question.position)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
