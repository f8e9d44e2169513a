// src/models/note.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'notes' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating or replacing a note. Both fields are required.
#[derive(Debug, Deserialize, Validate)]
pub struct NoteRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 10000))]
    pub content: String,
}
