//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const INSTRUCTOR: &str = "instructor";
    pub const STUDENT: &str = "student";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, INSTRUCTOR, STUDENT];
}

// =============================================================================
// ASSESSMENTS
// =============================================================================

/// Question option labels
pub mod option_labels {
    pub const A: &str = "A";
    pub const B: &str = "B";
    pub const C: &str = "C";
    pub const D: &str = "D";

    /// All valid option labels
    pub const ALL: &[&str] = &[A, B, C, D];
}

/// Fraction of the maximum score required to pass an assessment
pub const PASS_MARK_RATIO: f64 = 0.6;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum course title length
pub const MAX_COURSE_TITLE_LENGTH: u64 = 256;

/// Maximum course description length
pub const MAX_COURSE_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum assessment title length
pub const MAX_ASSESSMENT_TITLE_LENGTH: u64 = 256;

/// Maximum question text length
pub const MAX_QUESTION_TEXT_LENGTH: u64 = 1000;

/// Maximum option text length
pub const MAX_OPTION_TEXT_LENGTH: u64 = 500;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
