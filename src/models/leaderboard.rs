// src/models/leaderboard.rs

use serde::Serialize;

/// One ranked user on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub display_name: String,

    /// Sum of per-test percentages, rounded once after accumulation.
    pub total_score: i64,

    pub tests_completed: usize,

    /// `round(unrounded percentage sum / tests_completed)`.
    pub average_score: i64,

    /// 1-based position; equal averages still get distinct consecutive ranks.
    pub rank: usize,
}

/// Full ranking plus the requesting user's own position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    pub current_user_rank: Option<usize>,
}

/// Distinction shown next to high-ranking users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBadge {
    Champion,
    Top3,
    Top10,
}

impl RankBadge {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Champion),
            2..=3 => Some(Self::Top3),
            4..=10 => Some(Self::Top10),
            _ => None,
        }
    }
}

/// Leaderboard row as sent to the client.
#[derive(Debug, Serialize)]
pub struct LeaderboardRow {
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    pub badge: Option<RankBadge>,
}

/// Response body for `GET /api/leaderboard`.
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardRow>,
    pub current_user_rank: Option<usize>,
}

impl From<Leaderboard> for LeaderboardResponse {
    fn from(board: Leaderboard) -> Self {
        let entries = board
            .entries
            .into_iter()
            .map(|entry| LeaderboardRow {
                badge: RankBadge::for_rank(entry.rank),
                entry,
            })
            .collect();

        Self {
            entries,
            current_user_rank: board.current_user_rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_thresholds() {
        assert_eq!(RankBadge::for_rank(1), Some(RankBadge::Champion));
        assert_eq!(RankBadge::for_rank(2), Some(RankBadge::Top3));
        assert_eq!(RankBadge::for_rank(3), Some(RankBadge::Top3));
        assert_eq!(RankBadge::for_rank(4), Some(RankBadge::Top10));
        assert_eq!(RankBadge::for_rank(10), Some(RankBadge::Top10));
        assert_eq!(RankBadge::for_rank(11), None);
        assert_eq!(RankBadge::for_rank(0), None);
    }

    #[test]
    fn test_response_serializes_flat_rows() {
        let board = Leaderboard {
            entries: vec![LeaderboardEntry {
                user_id: "u2".to_string(),
                display_name: "Bob".to_string(),
                total_score: 90,
                tests_completed: 1,
                average_score: 90,
                rank: 1,
            }],
            current_user_rank: None,
        };

        let json = serde_json::to_value(LeaderboardResponse::from(board)).unwrap();
        assert_eq!(json["entries"][0]["display_name"], "Bob");
        assert_eq!(json["entries"][0]["rank"], 1);
        assert_eq!(json["entries"][0]["badge"], "champion");
        assert!(json["current_user_rank"].is_null());
    }
}
