//! Per-game progress container.
//!
//! Replaces the ambient global score store of the original UI with an
//! explicit container each game view owns and injects: pure update
//! operations plus a read-only snapshot, so every game instance's
//! lifecycle stays independent and testable.

use serde::Serialize;

const STARTING_LIVES: u32 = 3;

/// Read-only view of the current progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub score: u64,
    pub life: u32,
    pub level: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub total_words_typed: u64,
    pub wpm: u32,
    pub badges: Vec<String>,
}

/// Mutable progress state for one running game.
#[derive(Debug, Clone)]
pub struct GameProgress {
    score: u64,
    life: u32,
    level: u32,
    current_streak: u32,
    max_streak: u32,
    total_words_typed: u64,
    wpm: u32,
    badges: Vec<String>,
}

impl GameProgress {
    pub fn new() -> Self {
        Self {
            score: 0,
            life: STARTING_LIVES,
            level: 1,
            current_streak: 0,
            max_streak: 0,
            total_words_typed: 0,
            wpm: 0,
            badges: Vec::new(),
        }
    }

    pub fn increment_score(&mut self, points: u64) {
        self.score += points;
    }

    /// Lives never go below zero.
    pub fn decrement_life(&mut self) {
        self.life = self.life.saturating_sub(1);
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    /// Extends the streak and keeps the max in step.
    pub fn increment_streak(&mut self) {
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
    }

    pub fn reset_streak(&mut self) {
        self.current_streak = 0;
    }

    pub fn increment_words_typed(&mut self) {
        self.total_words_typed += 1;
    }

    pub fn set_wpm(&mut self, wpm: u32) {
        self.wpm = wpm;
    }

    /// Idempotent: awarding the same badge twice keeps one copy.
    pub fn add_badge(&mut self, badge: impl Into<String>) {
        let badge = badge.into();
        if !self.badges.contains(&badge) {
            self.badges.push(badge);
        }
    }

    /// Back to the initial state, dropping badges and streaks.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            score: self.score,
            life: self.life,
            level: self.level,
            current_streak: self.current_streak,
            max_streak: self.max_streak,
            total_words_typed: self.total_words_typed,
            wpm: self.wpm,
            badges: self.badges.clone(),
        }
    }
}

impl Default for GameProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot() {
        let progress = GameProgress::new();
        let snap = progress.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.life, STARTING_LIVES);
        assert_eq!(snap.level, 1);
        assert!(snap.badges.is_empty());
    }

    #[test]
    fn test_score_and_words_accumulate() {
        let mut progress = GameProgress::new();
        progress.increment_score(10);
        progress.increment_score(25);
        progress.increment_words_typed();
        progress.increment_words_typed();
        let snap = progress.snapshot();
        assert_eq!(snap.score, 35);
        assert_eq!(snap.total_words_typed, 2);
    }

    #[test]
    fn test_life_floors_at_zero() {
        let mut progress = GameProgress::new();
        for _ in 0..10 {
            progress.decrement_life();
        }
        assert_eq!(progress.snapshot().life, 0);
    }

    #[test]
    fn test_streak_tracks_max() {
        let mut progress = GameProgress::new();
        for _ in 0..5 {
            progress.increment_streak();
        }
        progress.reset_streak();
        progress.increment_streak();
        let snap = progress.snapshot();
        assert_eq!(snap.current_streak, 1);
        assert_eq!(snap.max_streak, 5);
    }

    #[test]
    fn test_badges_are_idempotent() {
        let mut progress = GameProgress::new();
        progress.add_badge("speedster");
        progress.add_badge("speedster");
        progress.add_badge("perfect-round");
        assert_eq!(
            progress.snapshot().badges,
            vec!["speedster".to_string(), "perfect-round".to_string()]
        );
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut progress = GameProgress::new();
        progress.increment_score(100);
        progress.increment_streak();
        progress.add_badge("speedster");
        progress.decrement_life();
        progress.reset();
        assert_eq!(progress.snapshot(), GameProgress::new().snapshot());
    }
}
