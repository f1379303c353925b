//! Pose debouncing: a goal pose must be held for a run of consecutive frames
//!
//! One frame at or above the threshold extends the streak; one frame below it
//! restarts the count from zero. When the streak reaches the required length a
//! single confirmation is emitted and the streak starts over.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::config::RecognitionConfig;
use crate::pose::{LetterPose, PoseComparator, PoseSample};

/// Most recent frames kept in the similarity history (20s at 30 fps)
pub const HISTORY_LIMIT: usize = 600;

/// The player held the goal pose long enough
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoseConfirmed {
    pub letter: char,
}

/// Result of scoring one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub similarity: f64,
    pub confirmed: Option<PoseConfirmed>,
}

/// Turns per-frame similarity into confirmed pose events
#[derive(Clone, Debug)]
pub struct RecognitionDebouncer {
    config: RecognitionConfig,
    goal: Option<Arc<LetterPose>>,
    streak: u32,
    /// Similarity of the latest frames observed against the current goal
    history: VecDeque<f64>,
}

impl RecognitionDebouncer {
    pub fn new(config: RecognitionConfig) -> Self {
        RecognitionDebouncer {
            config,
            goal: None,
            streak: 0,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    /// Assign a new goal pose; resets the streak and history
    pub fn set_goal(&mut self, goal: Arc<LetterPose>) {
        self.goal = Some(goal);
        self.streak = 0;
        self.history.clear();
    }

    /// Drop the goal (word complete); later frames are ignored
    pub fn clear_goal(&mut self) {
        self.goal = None;
        self.streak = 0;
        self.history.clear();
    }

    pub fn goal(&self) -> Option<&Arc<LetterPose>> {
        self.goal.as_ref()
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Oldest first, at most `HISTORY_LIMIT` entries
    pub fn history(&self) -> &VecDeque<f64> {
        &self.history
    }

    /// Take the similarity history, leaving it empty
    pub fn take_history(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.history).into()
    }

    /// Feed one frame's similarity against the current goal
    pub fn observe(&mut self, similarity: f64) -> Option<PoseConfirmed> {
        let letter = self.goal.as_ref()?.letter();
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(similarity);

        if similarity >= self.config.threshold {
            self.streak += 1;
        } else {
            self.streak = 0;
        }

        // A pose always needs at least one qualifying frame
        if self.streak >= self.config.required_frames.max(1) {
            self.streak = 0;
            log::debug!("Pose '{}' confirmed", letter);
            return Some(PoseConfirmed { letter });
        }

        None
    }

    /// Score a frame against the goal and feed the result
    ///
    /// Returns `None` when no goal is assigned.
    pub fn observe_sample(&mut self, sample: &PoseSample) -> Option<Observation> {
        let goal = Arc::clone(self.goal.as_ref()?);
        let similarity = PoseComparator::compare(sample, goal.sample());
        let confirmed = self.observe(similarity);
        Some(Observation {
            similarity,
            confirmed,
        })
    }
}
