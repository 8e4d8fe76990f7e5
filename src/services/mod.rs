//! Business logic services

pub mod assessment_service;
pub mod auth_service;
pub mod course_service;
pub mod scoring_service;
pub mod user_service;

pub use assessment_service::AssessmentService;
pub use auth_service::AuthService;
pub use course_service::CourseService;
pub use scoring_service::ScoringService;
pub use user_service::UserService;
