//! Leaderboard ranking.
//!
//! There is no server, so the board is a fixed set of seeded peers with the
//! current user's computed standing merged in. Sorting is descending by
//! average score and stable: ties keep insertion order, which puts peers
//! ahead of the current user on equal scores.

use serde::{Deserialize, Serialize};

use crate::model::{Quiz, QuizAttempt, UserProfile};
use crate::statistics;

/// Entry id used for the current user's row.
pub const CURRENT_USER_ID: &str = "current-user";

/// One row on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub username: String,
    pub average_score: u32,
    pub quizzes_mastered: u32,
    pub total_attempts: u32,
    #[serde(default)]
    pub is_current_user: bool,
}

/// The current user's computed standing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    pub username: String,
    pub average_score: u32,
    pub quizzes_mastered: u32,
    pub total_attempts: u32,
}

impl PlayerStanding {
    /// Compute a standing from the profile and attempt history, measuring
    /// mastery against the given quiz set.
    pub fn from_history(
        profile: &UserProfile,
        attempts: &[QuizAttempt],
        quizzes: &[Quiz],
    ) -> Self {
        let summary = statistics::summarize(attempts, quizzes);
        Self {
            username: profile.username.clone(),
            average_score: summary.average_percentage,
            quizzes_mastered: summary.quizzes_mastered,
            total_attempts: summary.total_attempts,
        }
    }
}

fn peer(id: &str, username: &str, average_score: u32, mastered: u32, attempts: u32) -> LeaderboardEntry {
    LeaderboardEntry {
        id: id.into(),
        username: username.into(),
        average_score,
        quizzes_mastered: mastered,
        total_attempts: attempts,
        is_current_user: false,
    }
}

/// The simulated peers every board starts from.
pub fn seed_entries() -> Vec<LeaderboardEntry> {
    vec![
        peer("user-1", "AIExpert42", 94, 3, 12),
        peer("user-2", "PromptMaster", 91, 3, 8),
        peer("user-3", "AgentDev", 87, 2, 15),
        peer("user-4", "NeuralNinja", 84, 2, 9),
        peer("user-5", "MLEnthusiast", 82, 2, 6),
        peer("user-6", "DeepLearner", 79, 2, 11),
        peer("user-7", "TechLearner", 76, 1, 10),
        peer("user-8", "CodeCrafter", 72, 1, 7),
        peer("user-9", "DataDriven", 68, 1, 5),
        peer("user-10", "AINewbie", 64, 0, 4),
    ]
}

/// Merge the current user into a peer list and sort the board.
///
/// The user only appears once they have at least one attempt.
pub fn rank(
    mut entries: Vec<LeaderboardEntry>,
    player: Option<&PlayerStanding>,
) -> Vec<LeaderboardEntry> {
    if let Some(player) = player {
        if player.total_attempts > 0 {
            entries.push(LeaderboardEntry {
                id: CURRENT_USER_ID.into(),
                username: player.username.clone(),
                average_score: player.average_score,
                quizzes_mastered: player.quizzes_mastered,
                total_attempts: player.total_attempts,
                is_current_user: true,
            });
        }
    }
    entries.sort_by(|a, b| b.average_score.cmp(&a.average_score));
    entries
}

/// One-based rank of the current user's row, if present.
pub fn player_rank(board: &[LeaderboardEntry]) -> Option<usize> {
    board
        .iter()
        .position(|entry| entry.is_current_user)
        .map(|index| index + 1)
}
