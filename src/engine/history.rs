// src/engine/history.rs

use serde::Serialize;

use crate::models::mock_test::{MockTest, percentage};

/// Summary numbers for a user's test history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HistoryStats {
    pub total_tests: usize,
    pub average_score: i64,
    pub best_score: i64,
    pub total_minutes: i64,
}

impl HistoryStats {
    /// Attempts without questions are left out of every figure.
    pub fn from_tests(tests: &[MockTest]) -> Self {
        let mut stats = Self::default();
        let mut sum = 0.0;
        let mut best = f64::MIN;

        for test in tests {
            let Some(pct) = percentage(test.score, test.total_questions) else {
                continue;
            };
            stats.total_tests += 1;
            stats.total_minutes += test.duration_minutes;
            sum += pct;
            best = best.max(pct);
        }

        if stats.total_tests > 0 {
            stats.average_score = (sum / stats.total_tests as f64).round() as i64;
            stats.best_score = best.round() as i64;
        }

        stats
    }
}
