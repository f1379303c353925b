//! Word progression: one word's life cycle and its time-based score
//!
//! ```text
//! NotStarted -> InProgress(0..n-1) -> Complete
//! ```
//! Only forward transitions. `start_word` re-initializes everything.
//!
//! Each letter is worth `max_score / n` points, scaled linearly by how much of
//! `char_goal_secs` was left when the pose was confirmed.

use std::time::Duration;

use crate::config::ScoringConfig;
use crate::error::{GameError, Result};
use crate::timing::Stopwatch;

/// Where the word currently is in its life cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressPhase {
    NotStarted,
    InProgress,
    Complete,
}

/// Score awarded for one finished letter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterScore {
    pub letter: char,
    pub elapsed: Duration,
    pub contribution: u64,
}

/// Outcome of advancing past the current letter
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Advance {
    /// Moved on to `next`
    Next { scored: CharacterScore, next: char },
    /// That was the last letter
    Completed {
        scored: CharacterScore,
        final_score: u64,
        word_elapsed: Duration,
    },
}

impl Advance {
    pub fn scored(&self) -> &CharacterScore {
        match self {
            Advance::Next { scored, .. } | Advance::Completed { scored, .. } => scored,
        }
    }
}

/// State machine for the word being spelled
#[derive(Clone, Debug)]
pub struct WordProgression {
    scoring: ScoringConfig,
    max_len: usize,
    word: String,
    letters: Vec<char>,
    current_index: usize,
    per_character_budget: f64,
    accumulated_score: u64,
    character_timer: Stopwatch,
    word_timer: Stopwatch,
    phase: ProgressPhase,
}

impl WordProgression {
    pub fn new(scoring: ScoringConfig, max_len: usize) -> Self {
        WordProgression {
            scoring,
            max_len,
            word: String::new(),
            letters: Vec::new(),
            current_index: 0,
            per_character_budget: 0.0,
            accumulated_score: 0,
            character_timer: Stopwatch::started_at(Duration::ZERO),
            word_timer: Stopwatch::started_at(Duration::ZERO),
            phase: ProgressPhase::NotStarted,
        }
    }

    /// Check that a word can be spelled: 1..=max_len ASCII letters
    pub fn validate(word: &str, max_len: usize) -> Result<String> {
        let normalized = word.trim().to_ascii_uppercase();
        let len = normalized.chars().count();
        if len == 0 || len > max_len || !normalized.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(GameError::InvalidWord {
                word: word.to_string(),
                max_len,
            });
        }
        Ok(normalized)
    }

    /// Begin a new word at `now`; returns its first letter
    pub fn start_word(&mut self, word: &str, now: Duration) -> Result<char> {
        let normalized = Self::validate(word, self.max_len)?;

        self.letters = normalized.chars().collect();
        self.word = normalized;
        self.current_index = 0;
        self.per_character_budget = self.scoring.max_score / self.letters.len() as f64;
        self.accumulated_score = 0;
        self.word_timer.restart(now);
        self.character_timer.restart(now);
        self.phase = ProgressPhase::InProgress;

        log::info!(
            "Word started: {} ({:.0} points per letter)",
            self.word,
            self.per_character_budget
        );
        Ok(self.letters[0])
    }

    /// Points for a letter finished after `elapsed`
    pub fn contribution(&self, elapsed: Duration) -> u64 {
        let goal = self.scoring.char_goal_secs;
        let scorable = (goal - elapsed.as_secs_f64()).max(0.0);
        // Saturating cast: a degenerate goal time yields 0
        (self.per_character_budget * (scorable / goal)) as u64
    }

    /// Finish the current letter at `now`
    ///
    /// Returns `None` when no word is in progress.
    pub fn advance_character(&mut self, now: Duration) -> Option<Advance> {
        if self.phase != ProgressPhase::InProgress {
            return None;
        }

        let letter = self.letters[self.current_index];
        let elapsed = self.character_timer.elapsed(now);
        let contribution = self.contribution(elapsed);
        self.accumulated_score += contribution;
        self.current_index += 1;

        log::debug!(
            "Letter {} took {:.2}s: {} / {:.0} points",
            letter,
            elapsed.as_secs_f64(),
            contribution,
            self.per_character_budget
        );

        let scored = CharacterScore {
            letter,
            elapsed,
            contribution,
        };

        if self.current_index == self.letters.len() {
            self.phase = ProgressPhase::Complete;
            let word_elapsed = self.word_timer.elapsed(now);
            log::info!(
                "Word complete: {} scored {} in {:.2}s",
                self.word,
                self.accumulated_score,
                word_elapsed.as_secs_f64()
            );
            return Some(Advance::Completed {
                scored,
                final_score: self.accumulated_score,
                word_elapsed,
            });
        }

        self.character_timer.restart(now);
        Some(Advance::Next {
            scored,
            next: self.letters[self.current_index],
        })
    }

    /// Exclude a pause of length `paused` from both timers
    pub fn shift_timers(&mut self, paused: Duration) {
        self.character_timer.shift(paused);
        self.word_timer.shift(paused);
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == ProgressPhase::Complete
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Letter being posed, if the word is in progress
    pub fn current_letter(&self) -> Option<char> {
        match self.phase {
            ProgressPhase::InProgress => self.letters.get(self.current_index).copied(),
            _ => None,
        }
    }

    /// Letters already spelled
    pub fn spelled(&self) -> &[char] {
        &self.letters[..self.current_index]
    }

    pub fn per_character_budget(&self) -> f64 {
        self.per_character_budget
    }

    pub fn accumulated_score(&self) -> u64 {
        self.accumulated_score
    }

    pub fn character_elapsed(&self, now: Duration) -> Duration {
        self.character_timer.elapsed(now)
    }

    pub fn word_elapsed(&self, now: Duration) -> Duration {
        self.word_timer.elapsed(now)
    }

    /// Total time excluded by pauses during this word
    pub fn paused_total(&self) -> Duration {
        self.word_timer.excluded()
    }
}
