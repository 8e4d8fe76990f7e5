//! Course service

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{AssessmentRepository, CourseRepository},
    error::{AppError, AppResult},
    handlers::courses::{
        request::{CreateCourseRequest, UpdateCourseRequest},
        response::{CourseResponse, CourseSummary, EnrollResponse, EnrollmentEntry},
    },
    models::Course,
};

/// Course service for business logic
pub struct CourseService;

impl CourseService {
    /// Create a new course
    pub async fn create_course(
        pool: &PgPool,
        requester_id: &Uuid,
        requester_role: &str,
        payload: CreateCourseRequest,
    ) -> AppResult<CourseResponse> {
        if !matches!(requester_role, roles::ADMIN | roles::INSTRUCTOR) {
            return Err(AppError::Forbidden(
                "Only instructors can create courses".to_string(),
            ));
        }

        let course = CourseRepository::create(
            pool,
            &payload.title,
            payload.description.as_deref(),
            requester_id,
        )
        .await?;

        Self::to_course_response(pool, course).await
    }

    /// Get course by ID
    pub async fn get_course(pool: &PgPool, id: &Uuid) -> AppResult<CourseResponse> {
        let course = CourseRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        Self::to_course_response(pool, course).await
    }

    /// Update course
    pub async fn update_course(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        payload: UpdateCourseRequest,
    ) -> AppResult<CourseResponse> {
        let course = CourseRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !course.is_managed_by(requester_id, requester_role) {
            return Err(AppError::Forbidden(
                "Cannot update other instructors' courses".to_string(),
            ));
        }

        let updated = CourseRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.description.as_deref(),
        )
        .await?;

        Self::to_course_response(pool, updated).await
    }

    /// Delete course
    pub async fn delete_course(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let course = CourseRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !course.is_managed_by(requester_id, requester_role) {
            return Err(AppError::Forbidden(
                "Cannot delete other instructors' courses".to_string(),
            ));
        }

        CourseRepository::delete(pool, id).await
    }

    /// List courses with pagination
    pub async fn list_courses(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        instructor_id: Option<&Uuid>,
    ) -> AppResult<(Vec<CourseSummary>, i64)> {
        let offset = ((page.max(1) - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (courses, total) =
            CourseRepository::list(pool, offset, limit, search, instructor_id).await?;

        let mut summaries = Vec::with_capacity(courses.len());
        for course in courses {
            summaries.push(Self::to_course_summary(pool, course).await?);
        }

        Ok((summaries, total))
    }

    /// Enroll a user in a course
    pub async fn enroll(
        pool: &PgPool,
        course_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<EnrollResponse> {
        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if CourseRepository::is_enrolled(pool, course_id, user_id).await? {
            return Err(AppError::AlreadyExists(
                "Already enrolled in this course".to_string(),
            ));
        }

        CourseRepository::enroll(pool, course_id, user_id).await?;

        Ok(EnrollResponse {
            message: "Successfully enrolled in course".to_string(),
            course_id: *course_id,
            course_title: course.title,
            enrolled_at: Utc::now(),
        })
    }

    /// Remove a user's enrollment from a course
    pub async fn unenroll(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !CourseRepository::is_enrolled(pool, course_id, user_id).await? {
            return Err(AppError::NotFound("Enrollment not found".to_string()));
        }

        CourseRepository::unenroll(pool, course_id, user_id).await
    }

    /// List enrollments for a course (course owner or admin only)
    pub async fn list_enrollments(
        pool: &PgPool,
        course_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<EnrollmentEntry>, i64)> {
        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !course.is_managed_by(requester_id, requester_role) {
            return Err(AppError::Forbidden(
                "Cannot view enrollments for other instructors' courses".to_string(),
            ));
        }

        let offset = ((page.max(1) - 1) * per_page) as i64;
        let limit = per_page as i64;

        let enrollments = sqlx::query_as::<_, EnrollmentEntry>(
            r#"
            SELECT
                e.user_id,
                u.username,
                u.display_name,
                e.enrolled_at
            FROM enrollments e
            JOIN users u ON e.user_id = u.id
            WHERE e.course_id = $1
            ORDER BY e.enrolled_at
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(course_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total = CourseRepository::enrollment_count(pool, course_id).await?;

        Ok((enrollments, total))
    }

    // Helper functions
    async fn to_course_response(pool: &PgPool, course: Course) -> AppResult<CourseResponse> {
        let instructor_name: Option<String> =
            sqlx::query_scalar(r#"SELECT username FROM users WHERE id = $1"#)
                .bind(course.instructor_id)
                .fetch_optional(pool)
                .await?;

        let enrollment_count = CourseRepository::enrollment_count(pool, &course.id).await?;
        let assessment_count = AssessmentRepository::count_by_course(pool, &course.id).await?;

        Ok(CourseResponse {
            id: course.id,
            title: course.title,
            description: course.description,
            instructor_id: course.instructor_id,
            instructor_name: instructor_name.unwrap_or_default(),
            enrollment_count,
            assessment_count,
            created_at: course.created_at,
            updated_at: course.updated_at,
        })
    }

    async fn to_course_summary(pool: &PgPool, course: Course) -> AppResult<CourseSummary> {
        let enrollment_count = CourseRepository::enrollment_count(pool, &course.id).await?;
        let assessment_count = AssessmentRepository::count_by_course(pool, &course.id).await?;

        Ok(CourseSummary {
            id: course.id,
            title: course.title,
            instructor_id: course.instructor_id,
            enrollment_count,
            assessment_count,
            created_at: course.created_at,
        })
    }
}
