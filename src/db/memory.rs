// src/db/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

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

#[derive(Default)]
struct Tables {
    tests: Vec<MockTest>,
    profiles: Vec<ProfileRecord>,
    courses: Vec<UserCourse>,
    notes: Vec<Note>,
    next_id: i64,
}

impl Tables {
    /// Ids are shared across tables; only uniqueness within a table matters.
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Process-local store. Used when no database is configured, and by tests.
#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn list_test_records(&self) -> Result<Vec<TestRecord>, AppError> {
        Ok(self.tables.read().await.tests.iter().map(MockTest::record).collect())
    }

    async fn list_profiles(&self) -> Result<Vec<ProfileRecord>, AppError> {
        Ok(self.tables.read().await.profiles.clone())
    }

    async fn list_user_tests(&self, user_id: &str) -> Result<Vec<MockTest>, AppError> {
        let tables = self.tables.read().await;
        // Rows are appended in completion order, so reversing gives newest first.
        Ok(tables
            .tests
            .iter()
            .rev()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_test(&self, user_id: &str, test: &NewMockTest) -> Result<MockTest, AppError> {
        let mut tables = self.tables.write().await;

        let row = MockTest {
            id: tables.next_id(),
            user_id: user_id.to_owned(),
            test_name: test.test_name.clone(),
            score: test.score,
            total_questions: test.total_questions,
            duration_minutes: test.duration_minutes,
            completed_at: chrono::Utc::now(),
        };
        tables.tests.push(row.clone());

        Ok(row)
    }

    async fn upsert_profile(&self, user_id: &str, display_name: &str) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        if let Some(profile) = tables.profiles.iter_mut().find(|p| p.user_id == user_id) {
            profile.display_name = Some(display_name.to_owned());
            return Ok(());
        }
        tables
            .profiles
            .push(ProfileRecord::new(user_id, Some(display_name)));
        Ok(())
    }

    async fn list_user_courses(&self, user_id: &str) -> Result<Vec<UserCourse>, AppError> {
        Ok(self
            .tables
            .read()
            .await
            .courses
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn enroll_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<UserCourse, AppError> {
        let mut tables = self.tables.write().await;
        if tables
            .courses
            .iter()
            .any(|c| c.user_id == user_id && c.course_id == course_id)
        {
            return Err(AppError::Conflict(format!(
                "Already enrolled in course '{}'",
                course_id
            )));
        }

        let row = UserCourse {
            id: tables.next_id(),
            user_id: user_id.to_owned(),
            course_id: course_id.to_owned(),
            progress: 0,
            enrolled_at: chrono::Utc::now(),
        };
        tables.courses.push(row.clone());

        Ok(row)
    }

    async fn update_course_progress(
        &self,
        user_id: &str,
        course_id: &str,
        progress: i32,
    ) -> Result<UserCourse, AppError> {
        let mut tables = self.tables.write().await;
        let course = tables
            .courses
            .iter_mut()
            .find(|c| c.user_id == user_id && c.course_id == course_id)
            .ok_or_else(|| course_not_found(course_id))?;

        course.progress = progress;
        Ok(course.clone())
    }

    async fn list_notes(&self, user_id: &str) -> Result<Vec<Note>, AppError> {
        Ok(self
            .tables
            .read()
            .await
            .notes
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn count_notes(&self, user_id: &str) -> Result<i64, AppError> {
        let tables = self.tables.read().await;
        let count = tables.notes.iter().filter(|n| n.user_id == user_id).count();
        i64::try_from(count).map_err(|e| AppError::InternalServerError(e.to_string()))
    }

    async fn create_note(&self, user_id: &str, note: &NoteRequest) -> Result<Note, AppError> {
        let mut tables = self.tables.write().await;
        let now = chrono::Utc::now();

        let row = Note {
            id: tables.next_id(),
            user_id: user_id.to_owned(),
            title: note.title.clone(),
            content: note.content.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.notes.push(row.clone());

        Ok(row)
    }

    async fn update_note(
        &self,
        user_id: &str,
        note_id: i64,
        note: &NoteRequest,
    ) -> Result<Note, AppError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .notes
            .iter_mut()
            .find(|n| n.id == note_id && n.user_id == user_id)
            .ok_or_else(|| note_not_found(note_id))?;

        row.title = note.title.clone();
        row.content = note.content.clone();
        row.updated_at = chrono::Utc::now();
        Ok(row.clone())
    }

    async fn delete_note(&self, user_id: &str, note_id: i64) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        let before = tables.notes.len();
        tables
            .notes
            .retain(|n| !(n.id == note_id && n.user_id == user_id));

        if tables.notes.len() == before {
            return Err(note_not_found(note_id));
        }
        Ok(())
    }
}
