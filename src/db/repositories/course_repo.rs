//! Course and enrollment repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Course};

/// Repository for course and enrollment database operations
pub struct CourseRepository;

impl CourseRepository {
    /// Create a new course
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
        instructor_id: &Uuid,
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, instructor_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(instructor_id)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Find course by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(r#"SELECT * FROM courses WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(course)
    }

    /// Update course
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Delete course
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM courses WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List courses with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        instructor_id: Option<&Uuid>,
    ) -> AppResult<(Vec<Course>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT * FROM courses
            WHERE
                ($1::text IS NULL OR title ILIKE $1)
                AND ($2::uuid IS NULL OR instructor_id = $2)
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(&search_pattern)
        .bind(instructor_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM courses
            WHERE
                ($1::text IS NULL OR title ILIKE $1)
                AND ($2::uuid IS NULL OR instructor_id = $2)
            "#,
        )
        .bind(&search_pattern)
        .bind(instructor_id)
        .fetch_one(pool)
        .await?;

        Ok((courses, count))
    }

    /// Enroll a user in a course
    pub async fn enroll(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO enrollments (course_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (course_id, user_id) DO NOTHING
            "#,
        )
        .bind(course_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Remove a user's enrollment from a course
    pub async fn unenroll(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM enrollments WHERE course_id = $1 AND user_id = $2"#)
            .bind(course_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Check if a user is enrolled in a course
    pub async fn is_enrolled(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM enrollments
                WHERE course_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Get enrollment count for a course
    pub async fn enrollment_count(pool: &PgPool, course_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM enrollments WHERE course_id = $1"#)
                .bind(course_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}
