//! High score table
//!
//! In-memory only, kept for the process lifetime: the game has no
//! persistence layer, but the embedder still wants a leaderboard to show
//! between sessions.

use serde::Serialize;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize)]
pub struct HighScoreEntry {
    /// Final session score
    pub score: u64,
    /// Ticks survived
    pub ticks: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score. Returns the rank achieved (1-indexed) or None if it
    /// did not qualify.
    pub fn add_score(&mut self, score: u64, ticks: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, ticks };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(100));
    }

    #[test]
    fn test_ranking_order() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(500, 1000), Some(1));
        assert_eq!(scores.add_score(900, 2000), Some(1));
        assert_eq!(scores.add_score(700, 1500), Some(2));
        assert_eq!(scores.top_score(), Some(900));
    }

    #[test]
    fn test_table_truncates() {
        let mut scores = HighScores::new();
        for i in 1..=12 {
            scores.add_score(i * 100, i);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // Lowest surviving entry is 300: 100 and 200 fell off
        assert_eq!(scores.entries.last().map(|e| e.score), Some(300));
        assert!(!scores.qualifies(300));
        assert!(scores.qualifies(301));
    }
}
