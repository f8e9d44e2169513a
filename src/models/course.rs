// src/models/course.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'user_courses' table in the database.
/// One row per (user, course) enrollment.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserCourse {
    pub id: i64,
    pub user_id: String,
    pub course_id: String,

    /// Percentage of the course's modules completed, 0..=100.
    pub progress: i32,

    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for updating progress on an enrolled course.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProgressRequest {
    #[validate(range(min = 0, max = 100, message = "Progress must be between 0 and 100."))]
    pub progress: i32,
}
