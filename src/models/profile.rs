// src/models/profile.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Label shown for users without a profile or without a name.
pub const ANONYMOUS: &str = "Anonymous";

/// Represents the 'profiles' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: String,
    pub display_name: Option<String>,
}

impl ProfileRecord {
    pub fn new(user_id: impl Into<String>, display_name: Option<&str>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.map(str::to_owned),
        }
    }
}

/// DTO for updating the current user's display name.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Display name length must be between 1 and 100 characters."
    ))]
    pub display_name: String,
}
