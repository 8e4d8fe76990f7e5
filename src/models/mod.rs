//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod assessment;
pub mod course;
pub mod result;
pub mod user;

pub use assessment::*;
pub use course::*;
pub use result::*;
pub use user::*;
