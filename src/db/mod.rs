// src/db/mod.rs

//! Data access. Handlers only see the `Repository` trait.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        course::UserCourse,
        mock_test::{MockTest, NewMockTest, TestRecord},
        note::{Note, NoteRequest},
        profile::ProfileRecord,
    },
};

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

#[async_trait]
pub trait Repository: Send + Sync {
    /// Every recorded attempt, in storage order.
    async fn list_test_records(&self) -> Result<Vec<TestRecord>, AppError>;

    async fn list_profiles(&self) -> Result<Vec<ProfileRecord>, AppError>;

    /// One user's attempts, newest first.
    async fn list_user_tests(&self, user_id: &str) -> Result<Vec<MockTest>, AppError>;

    async fn insert_test(&self, user_id: &str, test: &NewMockTest) -> Result<MockTest, AppError>;

    async fn upsert_profile(&self, user_id: &str, display_name: &str) -> Result<(), AppError>;

    /// Every course the user is enrolled in, oldest enrollment first.
    async fn list_user_courses(&self, user_id: &str) -> Result<Vec<UserCourse>, AppError>;

    /// Enrolls at progress 0. `Conflict` if already enrolled.
    async fn enroll_course(&self, user_id: &str, course_id: &str)
    -> Result<UserCourse, AppError>;

    /// `NotFound` if the user is not enrolled in the course.
    async fn update_course_progress(
        &self,
        user_id: &str,
        course_id: &str,
        progress: i32,
    ) -> Result<UserCourse, AppError>;

    /// One user's notes, newest first.
    async fn list_notes(&self, user_id: &str) -> Result<Vec<Note>, AppError>;

    async fn count_notes(&self, user_id: &str) -> Result<i64, AppError>;

    async fn create_note(&self, user_id: &str, note: &NoteRequest) -> Result<Note, AppError>;

    /// `NotFound` unless the note exists and belongs to the user.
    async fn update_note(
        &self,
        user_id: &str,
        note_id: i64,
        note: &NoteRequest,
    ) -> Result<Note, AppError>;

    /// `NotFound` unless the note exists and belongs to the user.
    async fn delete_note(&self, user_id: &str, note_id: i64) -> Result<(), AppError>;
}

pub(crate) fn course_not_found(course_id: &str) -> AppError {
    AppError::NotFound(format!("Not enrolled in course '{}'", course_id))
}

pub(crate) fn note_not_found(note_id: i64) -> AppError {
    AppError::NotFound(format!("Note {} not found", note_id))
}
