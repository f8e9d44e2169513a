// src/engine/placement.rs

use crate::models::{
    mock_test::TestRecord,
    placement::{ActivitySummary, PlacementResult, Tier},
};

/// Course progress at or above this value counts as completed.
pub const COURSE_COMPLETION_THRESHOLD: i32 = 80;

const TESTS_WEIGHT: f64 = 10.0;
const COURSES_WEIGHT: f64 = 20.0;
const TERM_COUNT: f64 = 3.0;

const EXCELLENT_COMPANIES: [&str; 5] = ["Google", "Microsoft", "Amazon", "Meta", "Apple"];
const VERY_GOOD_COMPANIES: [&str; 5] = ["Adobe", "Salesforce", "Oracle", "IBM", "Intel"];
const GOOD_COMPANIES: [&str; 5] = ["Infosys", "TCS", "Wipro", "Cognizant", "Accenture"];
const IMPROVEMENT_ADVICE: [&str; 1] = ["Focus on improving your skills"];

impl ActivitySummary {
    /// Derives the summary from a user's attempts and course progress values.
    /// Attempts without questions are ignored.
    pub fn from_activity(tests: &[TestRecord], course_progress: &[i32]) -> Self {
        let percentages: Vec<f64> = tests.iter().filter_map(TestRecord::percentage).collect();

        let average_score_percent = if percentages.is_empty() {
            0.0
        } else {
            percentages.iter().sum::<f64>() / percentages.len() as f64
        };

        let courses_completed = course_progress
            .iter()
            .filter(|&&p| p >= COURSE_COMPLETION_THRESHOLD)
            .count();

        Self {
            tests_completed: u32::try_from(percentages.len()).unwrap_or(u32::MAX),
            average_score_percent,
            courses_completed: u32::try_from(courses_completed).unwrap_or(u32::MAX),
        }
    }
}

/// `(tests * 10 + average + courses * 20) / 3`.
///
/// Terms are not normalized; the result can exceed 100.
pub fn performance_score(summary: &ActivitySummary) -> f64 {
    (f64::from(summary.tests_completed) * TESTS_WEIGHT
        + summary.average_score_percent
        + f64::from(summary.courses_completed) * COURSES_WEIGHT)
        / TERM_COUNT
}

/// Maps a performance score to its tier. Lower bounds are inclusive.
pub fn tier_for(score: f64) -> Tier {
    if score >= 80.0 {
        Tier::Excellent
    } else if score >= 60.0 {
        Tier::VeryGood
    } else if score >= 40.0 {
        Tier::Good
    } else {
        Tier::NeedsImprovement
    }
}

pub fn companies_for(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Excellent => &EXCELLENT_COMPANIES,
        Tier::VeryGood => &VERY_GOOD_COMPANIES,
        Tier::Good => &GOOD_COMPANIES,
        Tier::NeedsImprovement => &IMPROVEMENT_ADVICE,
    }
}

/// Classifies a user's activity into a placement tier.
pub fn predict(summary: &ActivitySummary) -> PlacementResult {
    let score = performance_score(summary);
    let tier = tier_for(score);

    PlacementResult {
        tier,
        recommended_companies: companies_for(tier).to_vec(),
        performance_score: score,
    }
}
