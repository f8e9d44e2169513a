// src/models/mock_test.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Represents the 'mock_tests' table in the database.
/// One row per completed test attempt.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MockTest {
    pub id: i64,
    pub user_id: String,
    pub test_name: String,

    /// Number of correctly answered questions.
    pub score: i64,

    pub total_questions: i64,
    pub duration_minutes: i64,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

impl MockTest {
    pub fn record(&self) -> TestRecord {
        TestRecord {
            user_id: self.user_id.clone(),
            score: self.score,
            total_questions: self.total_questions,
        }
    }
}

/// The minimal projection of a test attempt the ranking engine works on.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct TestRecord {
    pub user_id: String,
    pub score: i64,
    pub total_questions: i64,
}

impl TestRecord {
    pub fn new(user_id: impl Into<String>, score: i64, total_questions: i64) -> Self {
        Self {
            user_id: user_id.into(),
            score,
            total_questions,
        }
    }

    /// Percentage score of this attempt, or `None` when the record has no questions.
    pub fn percentage(&self) -> Option<f64> {
        percentage(self.score, self.total_questions)
    }
}

/// `score / total * 100`, undefined for a non-positive total.
///
/// The division happens before the scaling; `score * 100 / total` rounds
/// differently at .5 boundaries (23/40 is 57.4999.. this way, 57.5 the other).
pub(crate) fn percentage(score: i64, total_questions: i64) -> Option<f64> {
    if total_questions <= 0 {
        return None;
    }
    Some(score as f64 / total_questions as f64 * 100.0)
}

/// DTO for recording a finished test attempt.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_score_range))]
pub struct NewMockTest {
    #[validate(length(min = 1, max = 100))]
    pub test_name: String,
    #[validate(range(min = 0))]
    pub score: i64,
    #[validate(range(min = 1))]
    pub total_questions: i64,
    #[validate(range(min = 0))]
    pub duration_minutes: i64,
}

fn validate_score_range(req: &NewMockTest) -> Result<(), ValidationError> {
    if req.score > req.total_questions {
        return Err(ValidationError::new("score_exceeds_total_questions"));
    }
    Ok(())
}

/// Response body for a user's test history.
#[derive(Debug, Serialize)]
pub struct TestHistoryResponse {
    pub tests: Vec<MockTest>,
    pub stats: crate::engine::history::HistoryStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(score: i64, total_questions: i64) -> NewMockTest {
        NewMockTest {
            test_name: "Technical Mock Test".to_string(),
            score,
            total_questions,
            duration_minutes: 15,
        }
    }

    #[test]
    fn test_new_mock_test_valid() {
        assert!(request(7, 10).validate().is_ok());
        assert!(request(10, 10).validate().is_ok());
        assert!(request(0, 10).validate().is_ok());
    }

    #[test]
    fn test_new_mock_test_score_above_total() {
        assert!(request(11, 10).validate().is_err());
    }

    #[test]
    fn test_new_mock_test_zero_questions() {
        assert!(request(0, 0).validate().is_err());
    }

    #[test]
    fn test_new_mock_test_empty_name() {
        let mut req = request(5, 10);
        req.test_name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_percentage_guard() {
        assert_eq!(TestRecord::new("u1", 8, 10).percentage(), Some(80.0));
        assert_eq!(TestRecord::new("u1", 0, 0).percentage(), None);
        assert_eq!(TestRecord::new("u1", 3, -2).percentage(), None);
    }
}
