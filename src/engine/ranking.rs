// src/engine/ranking.rs

use std::collections::HashMap;

use crate::models::{
    leaderboard::{Leaderboard, LeaderboardEntry},
    mock_test::TestRecord,
    profile::{ANONYMOUS, ProfileRecord},
};

/// Running per-user totals, kept in first-encounter order.
struct UserTotals<'a> {
    user_id: &'a str,
    percent_sum: f64,
    count: usize,
}

/// Builds the leaderboard from every test attempt and profile.
///
/// * Attempts with `total_questions <= 0` are skipped.
/// * Users are ranked by rounded average percentage, highest first.
///   Equal averages keep the order in which each user first appears in `tests`.
/// * Ranks are `1..=n` with no gaps and no shared positions.
/// * `current_user_id` only selects `current_user_rank`; it never filters entries.
pub fn compute_leaderboard(
    tests: &[TestRecord],
    profiles: &[ProfileRecord],
    current_user_id: &str,
) -> Leaderboard {
    let mut order: Vec<UserTotals<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for test in tests {
        let Some(percent) = test.percentage() else {
            tracing::warn!(
                user_id = %test.user_id,
                total_questions = test.total_questions,
                "Skipping test record without questions"
            );
            continue;
        };

        let slot = *index.entry(test.user_id.as_str()).or_insert_with(|| {
            order.push(UserTotals {
                user_id: test.user_id.as_str(),
                percent_sum: 0.0,
                count: 0,
            });
            order.len() - 1
        });

        if let Some(totals) = order.get_mut(slot) {
            totals.percent_sum += percent;
            totals.count += 1;
        }
    }

    let names: HashMap<&str, &str> = profiles
        .iter()
        .filter_map(|p| {
            p.display_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .map(|name| (p.user_id.as_str(), name))
        })
        .collect();

    let mut entries: Vec<LeaderboardEntry> = order
        .into_iter()
        .map(|totals| LeaderboardEntry {
            user_id: totals.user_id.to_owned(),
            display_name: names
                .get(totals.user_id)
                .copied()
                .unwrap_or(ANONYMOUS)
                .to_owned(),
            total_score: totals.percent_sum.round() as i64,
            tests_completed: totals.count,
            average_score: (totals.percent_sum / totals.count as f64).round() as i64,
            rank: 0,
        })
        .collect();

    // `sort_by` is stable, which is what keeps tied users in encounter order.
    entries.sort_by(|a, b| b.average_score.cmp(&a.average_score));

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    let current_user_rank = entries
        .iter()
        .find(|e| e.user_id == current_user_id)
        .map(|e| e.rank);

    tracing::debug!(
        users = entries.len(),
        ?current_user_rank,
        "Computed leaderboard"
    );

    Leaderboard {
        entries,
        current_user_rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(user: &str, score: i64, total: i64) -> TestRecord {
        TestRecord::new(user, score, total)
    }

    fn p(user: &str, name: &str) -> ProfileRecord {
        ProfileRecord::new(user, Some(name))
    }

    #[test]
    fn test_alice_and_bob() {
        let tests = vec![t("u1", 8, 10), t("u2", 9, 10), t("u1", 7, 10)];
        let profiles = vec![p("u1", "Alice"), p("u2", "Bob")];

        let board = compute_leaderboard(&tests, &profiles, "u1");

        assert_eq!(board.entries.len(), 2);
        let bob = &board.entries[0];
        assert_eq!(bob.display_name, "Bob");
        assert_eq!(bob.rank, 1);
        assert_eq!(bob.average_score, 90);
        assert_eq!(bob.tests_completed, 1);

        let alice = &board.entries[1];
        assert_eq!(alice.display_name, "Alice");
        assert_eq!(alice.rank, 2);
        assert_eq!(alice.average_score, 75);
        assert_eq!(alice.total_score, 150);
        assert_eq!(alice.tests_completed, 2);

        assert_eq!(board.current_user_rank, Some(2));
    }

    #[test]
    fn test_missing_profile_is_anonymous() {
        let board = compute_leaderboard(&[t("u3", 5, 10)], &[], "u3");

        assert_eq!(board.entries.len(), 1);
        assert_eq!(board.entries[0].display_name, "Anonymous");
        assert_eq!(board.entries[0].rank, 1);
        assert_eq!(board.entries[0].average_score, 50);
        assert_eq!(board.current_user_rank, Some(1));
    }

    #[test]
    fn test_profile_without_name_is_anonymous() {
        let profiles = vec![
            ProfileRecord::new("u1", None),
            ProfileRecord::new("u2", Some("")),
        ];
        let board = compute_leaderboard(&[t("u1", 1, 2), t("u2", 1, 2)], &profiles, "u1");

        assert!(board.entries.iter().all(|e| e.display_name == "Anonymous"));
    }

    #[test]
    fn test_empty_input() {
        let board = compute_leaderboard(&[], &[p("u1", "Alice")], "u1");

        assert!(board.entries.is_empty());
        assert_eq!(board.current_user_rank, None);
    }

    #[test]
    fn test_absent_current_user() {
        let board = compute_leaderboard(&[t("u1", 8, 10)], &[], "nobody");
        assert_eq!(board.current_user_rank, None);
    }

    #[test]
    fn test_zero_question_records_are_skipped() {
        let tests = vec![t("u1", 0, 0), t("u2", 4, 10), t("u1", 6, 10), t("u3", 5, 0)];
        let board = compute_leaderboard(&tests, &[], "u3");

        assert_eq!(board.entries.len(), 2);
        let u1 = board.entries.iter().find(|e| e.user_id == "u1").unwrap();
        assert_eq!(u1.tests_completed, 1);
        assert_eq!(u1.average_score, 60);
        assert!(board.entries.iter().all(|e| e.user_id != "u3"));
        assert_eq!(board.current_user_rank, None);
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        // u2 appears first, then u1; both average 50.
        let tests = vec![t("u2", 5, 10), t("u1", 1, 2), t("u3", 9, 10)];
        let board = compute_leaderboard(&tests, &[], "u1");

        let ids: Vec<&str> = board.entries.iter().map(|e| e.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u3", "u2", "u1"]);
        assert_eq!(board.entries[1].rank, 2);
        assert_eq!(board.entries[2].rank, 3);
    }

    #[test]
    fn test_ranks_are_dense_and_sorted() {
        let mut tests = Vec::new();
        for i in 0..25i64 {
            tests.push(t(&format!("user{}", i % 9), (i * 7) % 11, 10));
        }
        let board = compute_leaderboard(&tests, &[], "user0");

        let ranks: Vec<usize> = board.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=9).collect::<Vec<_>>());

        for pair in board.entries.windows(2) {
            assert!(pair[0].average_score >= pair[1].average_score);
        }
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 1/8 = 12.5% -> 13
        let board = compute_leaderboard(&[t("u1", 1, 8)], &[], "u1");
        assert_eq!(board.entries[0].average_score, 13);
        assert_eq!(board.entries[0].total_score, 13);
    }

    #[test]
    fn test_percentage_divides_before_scaling() {
        // 23 / 40 * 100 = 57.49999999999999 in f64, so the average rounds down.
        let board = compute_leaderboard(&[t("u1", 23, 40)], &[], "u1");
        assert_eq!(board.entries[0].average_score, 57);
        assert_eq!(board.entries[0].total_score, 57);
    }

    #[test]
    fn test_average_uses_unrounded_sum() {
        // 1/3 + 1/3 = 66.67 -> total 67, average 33.33 -> 33
        let board = compute_leaderboard(&[t("u1", 1, 3), t("u1", 1, 3)], &[], "u1");
        assert_eq!(board.entries[0].total_score, 67);
        assert_eq!(board.entries[0].average_score, 33);
    }

    #[test]
    fn test_deterministic() {
        let tests = vec![t("a", 3, 4), t("b", 3, 4), t("c", 1, 4), t("a", 2, 4)];
        let profiles = vec![p("a", "A"), p("c", "C")];

        let first = compute_leaderboard(&tests, &profiles, "b");
        let second = compute_leaderboard(&tests, &profiles, "b");
        assert_eq!(first, second);
    }
}
