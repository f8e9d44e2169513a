// src/db/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::{Repository, course_not_found, note_not_found};
use crate::{
    error::AppError,
    models::{
        course::UserCourse,
        mock_test::{MockTest, NewMockTest, TestRecord},
        note::{Note, NoteRequest},
        profile::ProfileRecord,
    },
};

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn list_test_records(&self) -> Result<Vec<TestRecord>, AppError> {
        let records = sqlx::query_as::<_, TestRecord>(
            r#"
            SELECT user_id, score, total_questions
            FROM mock_tests
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch test records: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(records)
    }

    async fn list_profiles(&self) -> Result<Vec<ProfileRecord>, AppError> {
        let profiles = sqlx::query_as::<_, ProfileRecord>(
            "SELECT user_id, display_name FROM profiles",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch profiles: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(profiles)
    }

    async fn list_user_tests(&self, user_id: &str) -> Result<Vec<MockTest>, AppError> {
        let tests = sqlx::query_as::<_, MockTest>(
            r#"
            SELECT id, user_id, test_name, score, total_questions, duration_minutes, completed_at
            FROM mock_tests
            WHERE user_id = $1
            ORDER BY completed_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tests)
    }

    async fn insert_test(&self, user_id: &str, test: &NewMockTest) -> Result<MockTest, AppError> {
        let row = sqlx::query_as::<_, MockTest>(
            r#"
            INSERT INTO mock_tests (user_id, test_name, score, total_questions, duration_minutes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, test_name, score, total_questions, duration_minutes, completed_at
            "#,
        )
        .bind(user_id)
        .bind(&test.test_name)
        .bind(test.score)
        .bind(test.total_questions)
        .bind(test.duration_minutes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert mock test: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(row)
    }

    async fn upsert_profile(&self, user_id: &str, display_name: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, display_name)
            VALUES ($1, $2)
            ON CONFLICT(user_id) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(user_id)
        .bind(display_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_user_courses(&self, user_id: &str) -> Result<Vec<UserCourse>, AppError> {
        let courses = sqlx::query_as::<_, UserCourse>(
            r#"
            SELECT id, user_id, course_id, progress, enrolled_at
            FROM user_courses
            WHERE user_id = $1
            ORDER BY enrolled_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    async fn enroll_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<UserCourse, AppError> {
        sqlx::query_as::<_, UserCourse>(
            r#"
            INSERT INTO user_courses (user_id, course_id, progress)
            VALUES ($1, $2, 0)
            ON CONFLICT(user_id, course_id) DO NOTHING
            RETURNING id, user_id, course_id, progress, enrolled_at
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to enroll in course: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?
        .ok_or_else(|| AppError::Conflict(format!("Already enrolled in course '{}'", course_id)))
    }

    async fn update_course_progress(
        &self,
        user_id: &str,
        course_id: &str,
        progress: i32,
    ) -> Result<UserCourse, AppError> {
        sqlx::query_as::<_, UserCourse>(
            r#"
            UPDATE user_courses
            SET progress = $3
            WHERE user_id = $1 AND course_id = $2
            RETURNING id, user_id, course_id, progress, enrolled_at
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .bind(progress)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| course_not_found(course_id))
    }

    async fn list_notes(&self, user_id: &str) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    async fn count_notes(&self, user_id: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notes WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn create_note(&self, user_id: &str, note: &NoteRequest) -> Result<Note, AppError> {
        let row = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (user_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&note.title)
        .bind(&note.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_note(
        &self,
        user_id: &str,
        note_id: i64,
        note: &NoteRequest,
    ) -> Result<Note, AppError> {
        sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = $3, content = $4, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(note_id)
        .bind(user_id)
        .bind(&note.title)
        .bind(&note.content)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| note_not_found(note_id))
    }

    async fn delete_note(&self, user_id: &str, note_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(note_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(note_not_found(note_id));
        }

        Ok(())
    }
}
