//! Assessment authoring service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{AssessmentRepository, CourseRepository},
    error::{AppError, AppResult},
    handlers::assessments::{
        request::{CreateAssessmentRequest, QuestionInput, UpdateAssessmentRequest},
        response::{
            AssessmentDetailResponse, AssessmentResponse, AssessmentSummary,
            PublicQuestionResponse, QuestionResponse,
        },
    },
    models::{Assessment, NewQuestion},
    utils::validation::normalize_option_label,
};

/// Assessment service for authoring and read operations
pub struct AssessmentService;

impl AssessmentService {
    /// Create an assessment with its questions
    pub async fn create_assessment(
        pool: &PgPool,
        requester_id: &Uuid,
        requester_role: &str,
        payload: CreateAssessmentRequest,
    ) -> AppResult<AssessmentResponse> {
        let course = CourseRepository::find_by_id(pool, &payload.course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !course.is_managed_by(requester_id, requester_role) {
            return Err(AppError::Forbidden(
                "Cannot create assessments for other instructors' courses".to_string(),
            ));
        }

        let questions = Self::to_new_questions(&payload.questions)?;

        let assessment = AssessmentRepository::create_with_questions(
            pool,
            &payload.course_id,
            &payload.title,
            payload.max_score,
            &questions,
        )
        .await?;

        Self::to_authoring_response(pool, assessment).await
    }

    /// Get the public view of an assessment (correct options hidden)
    pub async fn get_assessment(pool: &PgPool, id: &Uuid) -> AppResult<AssessmentDetailResponse> {
        let assessment = AssessmentRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))?;

        let questions = AssessmentRepository::list_questions(pool, id).await?;

        Ok(AssessmentDetailResponse {
            id: assessment.id,
            course_id: assessment.course_id,
            title: assessment.title,
            max_score: assessment.max_score,
            questions: questions
                .into_iter()
                .map(|q| PublicQuestionResponse {
                    id: q.id,
                    text: q.text,
                    option_a: q.option_a,
                    option_b: q.option_b,
                    option_c: q.option_c,
                    option_d: q.option_d,
                })
                .collect(),
            created_at: assessment.created_at,
            updated_at: assessment.updated_at,
        })
    }

    /// Update assessment metadata and optionally replace its questions
    pub async fn update_assessment(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        payload: UpdateAssessmentRequest,
    ) -> AppResult<AssessmentResponse> {
        let assessment = Self::find_managed(pool, id, requester_id, requester_role).await?;

        let questions = payload
            .questions
            .as_deref()
            .map(Self::to_new_questions)
            .transpose()?;

        let updated = AssessmentRepository::update(
            pool,
            &assessment.id,
            payload.title.as_deref(),
            payload.max_score,
            questions.as_deref(),
        )
        .await?;

        Self::to_authoring_response(pool, updated).await
    }

    /// Delete assessment
    pub async fn delete_assessment(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let assessment = Self::find_managed(pool, id, requester_id, requester_role).await?;

        AssessmentRepository::delete(pool, &assessment.id).await
    }

    /// List assessments belonging to a course
    pub async fn list_course_assessments(
        pool: &PgPool,
        course_id: &Uuid,
    ) -> AppResult<Vec<AssessmentSummary>> {
        CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let assessments = AssessmentRepository::list_by_course(pool, course_id).await?;

        let mut summaries = Vec::with_capacity(assessments.len());
        for assessment in assessments {
            let question_count =
                AssessmentRepository::question_count(pool, &assessment.id).await?;
            summaries.push(AssessmentSummary {
                id: assessment.id,
                title: assessment.title,
                max_score: assessment.max_score,
                question_count,
                created_at: assessment.created_at,
            });
        }

        Ok(summaries)
    }

    /// Look up an assessment and verify the requester manages its course
    async fn find_managed(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<Assessment> {
        let assessment = AssessmentRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))?;

        let course = CourseRepository::find_by_id(pool, &assessment.course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !course.is_managed_by(requester_id, requester_role) {
            return Err(AppError::Forbidden(
                "Cannot modify assessments for other instructors' courses".to_string(),
            ));
        }

        Ok(assessment)
    }

    fn to_new_questions(inputs: &[QuestionInput]) -> AppResult<Vec<NewQuestion>> {
        inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                let correct_option =
                    normalize_option_label(&input.correct_option).ok_or_else(|| {
                        AppError::InvalidInput(format!(
                            "Question {}: correct option must be one of A-D",
                            index + 1
                        ))
                    })?;

                Ok(NewQuestion {
                    text: input.text.clone(),
                    option_a: input.option_a.clone(),
                    option_b: input.option_b.clone(),
                    option_c: input.option_c.clone(),
                    option_d: input.option_d.clone(),
                    correct_option,
                    position: index as i32,
                })
            })
            .collect()
    }

    async fn to_authoring_response(
        pool: &PgPool,
        assessment: Assessment,
    ) -> AppResult<AssessmentResponse> {
        let questions = AssessmentRepository::list_questions(pool, &assessment.id).await?;

        Ok(AssessmentResponse {
            id: assessment.id,
            course_id: assessment.course_id,
            title: assessment.title,
            max_score: assessment.max_score,
            questions: questions
                .into_iter()
                .map(|q| QuestionResponse {
                    id: q.id,
                    text: q.text,
                    option_a: q.option_a,
                    option_b: q.option_b,
                    option_c: q.option_c,
                    option_d: q.option_d,
                    correct_option: q.correct_option,
                })
                .collect(),
            created_at: assessment.created_at,
            updated_at: assessment.updated_at,
        })
    }
}
