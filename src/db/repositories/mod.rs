//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod assessment_repo;
pub mod course_repo;
pub mod result_repo;
pub mod user_repo;

pub use assessment_repo::AssessmentRepository;
pub use course_repo::CourseRepository;
pub use result_repo::ResultRepository;
pub use user_repo::UserRepository;
