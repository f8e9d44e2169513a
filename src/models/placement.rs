// src/models/placement.rs

use serde::Serialize;

/// Aggregate activity counters for a single user, the predictor's input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ActivitySummary {
    pub tests_completed: u32,

    /// Unrounded mean percentage over all valid attempts.
    pub average_score_percent: f64,

    /// Courses whose stored progress is at least 80.
    pub courses_completed: u32,
}

/// Qualitative placement band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::VeryGood => "Very Good",
            Tier::Good => "Good",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementResult {
    pub tier: Tier,
    pub recommended_companies: Vec<&'static str>,
    pub performance_score: f64,
}

/// Headline numbers shown beside the prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementStats {
    pub tests_completed: u32,
    pub average_score: i64,
    pub courses_completed: u32,
    pub notes_count: i64,
}

/// Response body for `GET /api/placement`.
#[derive(Debug, Serialize)]
pub struct PlacementResponse {
    pub stats: PlacementStats,
    pub prediction: PlacementResult,
}
