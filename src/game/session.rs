//! Game session: drives words, frames and pauses
//!
//! Every incoming frame goes through the same path, synchronously:
//! compare against the goal -> debounce -> advance the word on confirmation.
//! The goal pose and the letter index are both owned here and only change
//! together inside `process_frame`, so no caller can see one without the other.
//!
//! Pausing never stops the clock. The pause start is recorded and, on resume,
//! the word timers are shifted forward by exactly the paused duration.

use std::sync::Arc;
use std::time::Duration;

use super::events::{GameEvent, GameEventSink, SensorStatus};
use super::progression::{Advance, WordProgression};
use super::words::WordPicker;
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::pose::{LetterPose, PoseLibrary, PoseSample};
use crate::recognition::RecognitionDebouncer;
use crate::timing::Clock;

/// What a frame did
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Paused, sensor down, or no word in progress
    Ignored,
    /// Scored against the goal, no confirmation yet
    Observed { similarity: f64 },
    /// This frame confirmed the goal pose
    Advanced { similarity: f64, advance: Advance },
}

impl FrameOutcome {
    pub fn similarity(&self) -> Option<f64> {
        match self {
            FrameOutcome::Ignored => None,
            FrameOutcome::Observed { similarity } | FrameOutcome::Advanced { similarity, .. } => {
                Some(*similarity)
            }
        }
    }
}

/// Character and word timer readings, pause-excluded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub character: Duration,
    pub word: Duration,
}

/// One player's game
pub struct GameSession {
    config: GameConfig,
    library: Arc<PoseLibrary>,
    picker: WordPicker,
    progression: WordProgression,
    debouncer: RecognitionDebouncer,
    /// Goal pose for every letter of the current word
    goals: Vec<Arc<LetterPose>>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn GameEventSink>,
    paused_at: Option<Duration>,
    /// Pause requested by the player, as opposed to by a sensor drop-out
    user_paused: bool,
    sensor: SensorStatus,
    final_timers: Option<TimerSnapshot>,
    total_score: u64,
    words_completed: u32,
}

impl GameSession {
    pub fn new(
        config: GameConfig,
        library: Arc<PoseLibrary>,
        picker: WordPicker,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn GameEventSink>,
    ) -> Self {
        GameSession {
            progression: WordProgression::new(config.scoring, config.max_word_len),
            debouncer: RecognitionDebouncer::new(config.recognition),
            config,
            library,
            picker,
            goals: Vec::new(),
            clock,
            sink,
            paused_at: None,
            user_paused: false,
            sensor: SensorStatus::Connected,
            final_timers: None,
            total_score: 0,
            words_completed: 0,
        }
    }

    /// Draw a random spellable word from the configured list
    pub fn next_word(&mut self) -> Result<String> {
        self.picker.next_word()
    }

    /// Draw a word and start spelling it
    pub fn start_next_word(&mut self) -> Result<char> {
        let word = self.next_word()?;
        self.start_word(&word)
    }

    /// Start spelling `word`; returns its first letter
    ///
    /// Fails if a letter has no goal pose, which means the library is corrupt.
    pub fn start_word(&mut self, word: &str) -> Result<char> {
        if self.sensor == SensorStatus::Disconnected {
            return Err(GameError::SensorUnavailable);
        }
        if self.is_paused() {
            return Err(GameError::SessionPaused);
        }

        let normalized = WordProgression::validate(word, self.config.max_word_len)?;
        let goals = normalized
            .chars()
            .map(|c| self.library.goal(c))
            .collect::<Result<Vec<_>>>()?;

        let now = self.clock.now();
        let first = self.progression.start_word(&normalized, now)?;
        self.debouncer.set_goal(Arc::clone(&goals[0]));
        self.goals = goals;
        self.final_timers = None;

        self.sink.on_event(GameEvent::WordStarted {
            word: normalized,
            first_letter: first,
        });
        Ok(first)
    }

    /// Run one sensor frame through recognition and progression
    pub fn process_frame(&mut self, sample: &PoseSample) -> FrameOutcome {
        if self.is_paused() || self.progression.current_letter().is_none() {
            return FrameOutcome::Ignored;
        }

        let observation = match self.debouncer.observe_sample(sample) {
            Some(observation) => observation,
            None => return FrameOutcome::Ignored,
        };
        let similarity = observation.similarity;

        let confirmed = match observation.confirmed {
            Some(confirmed) => confirmed,
            None => return FrameOutcome::Observed { similarity },
        };

        let now = self.clock.now();
        self.sink.on_event(GameEvent::PoseConfirmed {
            letter: confirmed.letter,
        });

        let advance = match self.progression.advance_character(now) {
            Some(advance) => advance,
            None => return FrameOutcome::Observed { similarity },
        };

        let scored = *advance.scored();
        self.sink.on_event(GameEvent::CharacterScored {
            letter: scored.letter,
            elapsed: scored.elapsed,
            contribution: scored.contribution,
            score: self.progression.accumulated_score(),
        });

        match advance {
            Advance::Next { next, .. } => {
                let history = self.debouncer.take_history();
                let goal = Arc::clone(&self.goals[self.progression.current_index()]);
                self.debouncer.set_goal(goal);
                self.sink.on_event(GameEvent::CharacterAdvanced {
                    letter: next,
                    similarity_history: history,
                });
            }
            Advance::Completed {
                final_score,
                word_elapsed,
                ..
            } => {
                self.debouncer.clear_goal();
                self.total_score += final_score;
                self.words_completed += 1;
                self.final_timers = Some(TimerSnapshot {
                    character: Duration::ZERO,
                    word: word_elapsed,
                });
                self.sink.on_event(GameEvent::WordCompleted {
                    word: self.progression.word().to_string(),
                    final_score,
                    elapsed: word_elapsed,
                });
            }
        }

        FrameOutcome::Advanced {
            similarity,
            advance,
        }
    }

    /// Player pause; frames are ignored until `resume`
    pub fn pause(&mut self) {
        self.user_paused = true;
        self.enter_pause();
    }

    /// Player resume; returns false while the sensor is disconnected
    pub fn resume(&mut self) -> bool {
        self.user_paused = false;
        if self.sensor == SensorStatus::Disconnected {
            return false;
        }
        self.leave_pause();
        true
    }

    /// Pause when paused, resume otherwise
    pub fn toggle_pause(&mut self) -> bool {
        if self.is_paused() {
            self.resume()
        } else {
            self.pause();
            true
        }
    }

    /// Sensor driver reported a status change
    ///
    /// A disconnect pauses the game; reconnecting resumes it unless the player
    /// had paused as well.
    pub fn sensor_status_changed(&mut self, status: SensorStatus) {
        if status == self.sensor {
            return;
        }
        self.sensor = status;
        self.sink.on_event(GameEvent::SensorStatusChanged { status });

        match status {
            SensorStatus::Disconnected => self.enter_pause(),
            SensorStatus::Connected if !self.user_paused => self.leave_pause(),
            _ => {}
        }
    }

    fn enter_pause(&mut self) {
        if self.paused_at.is_some() {
            return;
        }
        self.paused_at = Some(self.clock.now());
        self.sink.on_event(GameEvent::Paused);
    }

    fn leave_pause(&mut self) {
        let Some(paused_at) = self.paused_at.take() else {
            return;
        };
        let paused_for = self.clock.now().saturating_sub(paused_at);
        self.progression.shift_timers(paused_for);
        self.sink.on_event(GameEvent::Resumed { paused_for });
    }

    /// Timer readings for the on-screen labels; frozen while paused
    pub fn timers(&self) -> TimerSnapshot {
        if let Some(timers) = self.final_timers {
            return timers;
        }
        let now = self.paused_at.unwrap_or_else(|| self.clock.now());
        TimerSnapshot {
            character: self.progression.character_elapsed(now),
            word: self.progression.word_elapsed(now),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn sensor_status(&self) -> SensorStatus {
        self.sensor
    }

    pub fn progression(&self) -> &WordProgression {
        &self.progression
    }

    pub fn current_letter(&self) -> Option<char> {
        self.progression.current_letter()
    }

    /// Goal pose the player is meant to be holding
    pub fn goal(&self) -> Option<&Arc<LetterPose>> {
        self.debouncer.goal()
    }

    pub fn streak(&self) -> u32 {
        self.debouncer.streak()
    }

    pub fn word_complete(&self) -> bool {
        self.progression.is_complete()
    }

    /// Score of the current word so far
    pub fn score(&self) -> u64 {
        self.progression.accumulated_score()
    }

    /// Sum of all completed words' scores
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    pub fn words_completed(&self) -> u32 {
        self.words_completed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::game::events::EventLog;
    use crate::pose::semaphore;
    use crate::timing::ManualClock;

    struct Harness {
        session: GameSession,
        clock: ManualClock,
        events: Arc<EventLog>,
        library: Arc<PoseLibrary>,
    }

    fn harness(words: &[&str], config: GameConfig) -> Harness {
        let list: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let clock = ManualClock::new();
        let events = Arc::new(EventLog::new());
        let library = Arc::new(PoseLibrary::builtin());
        let picker = WordPicker::with_seed(&list, config.max_word_len, 11);
        let session = GameSession::new(
            config,
            Arc::clone(&library),
            picker,
            Arc::new(clock.clone()),
            events.clone(),
        );
        Harness {
            session,
            clock,
            events,
            library,
        }
    }

    impl Harness {
        /// Hold the current goal pose until it is confirmed
        fn hold_goal(&mut self) -> FrameOutcome {
            let letter = self.session.current_letter().unwrap();
            let pose = self.library.goal(letter).unwrap();
            let frames = self.session.config().recognition.required_frames;
            let mut outcome = FrameOutcome::Ignored;
            for _ in 0..frames {
                outcome = self.session.process_frame(pose.sample());
            }
            outcome
        }
    }

    #[test]
    fn test_frames_before_start_are_ignored() {
        let mut h = harness(&["cat"], GameConfig::default());
        let frame = semaphore::neutral_pose();
        assert_eq!(h.session.process_frame(&frame), FrameOutcome::Ignored);
    }

    #[test]
    fn test_goal_and_index_move_together() {
        let mut h = harness(&["cab"], GameConfig::default());
        assert_eq!(h.session.start_next_word().unwrap(), 'C');
        assert_eq!(h.session.goal().unwrap().letter(), 'C');

        h.hold_goal();
        assert_eq!(h.session.progression().current_index(), 1);
        assert_eq!(h.session.goal().unwrap().letter(), 'A');
        assert_eq!(h.session.streak(), 0);

        h.hold_goal();
        assert_eq!(h.session.progression().current_index(), 2);
        assert_eq!(h.session.goal().unwrap().letter(), 'B');
    }

    #[test]
    fn test_wrong_pose_never_advances() {
        let mut h = harness(&["x"], GameConfig::default());
        h.session.start_next_word().unwrap();
        let wrong = h.library.goal('A').unwrap();
        for _ in 0..100 {
            let outcome = h.session.process_frame(wrong.sample());
            assert!(matches!(outcome, FrameOutcome::Observed { similarity } if similarity < 92.0));
        }
        assert_eq!(h.session.progression().current_index(), 0);
    }

    #[test]
    fn test_paused_frames_do_not_count() {
        let mut h = harness(&["a"], GameConfig::default());
        h.session.start_next_word().unwrap();
        let goal = h.library.goal('A').unwrap();
        for _ in 0..10 {
            h.session.process_frame(goal.sample());
        }
        h.session.pause();
        for _ in 0..50 {
            assert_eq!(h.session.process_frame(goal.sample()), FrameOutcome::Ignored);
        }
        assert_eq!(h.session.streak(), 10);
        assert!(h.session.resume());
        for _ in 0..5 {
            h.session.process_frame(goal.sample());
        }
        assert!(h.session.word_complete());
    }

    #[test]
    fn test_pause_does_not_cost_points() {
        let config = GameConfig::default();
        let mut paused = harness(&["a"], config.clone());
        let mut straight = harness(&["a"], config);
        paused.session.start_next_word().unwrap();
        straight.session.start_next_word().unwrap();

        paused.clock.advance(Duration::from_secs(2));
        paused.session.pause();
        paused.clock.advance(Duration::from_secs(60));
        assert_eq!(paused.session.timers().character, Duration::from_secs(2));
        paused.session.resume();
        paused.clock.advance(Duration::from_secs(1));

        straight.clock.advance(Duration::from_secs(3));

        assert_eq!(paused.session.timers(), straight.session.timers());
        paused.hold_goal();
        straight.hold_goal();
        assert_eq!(paused.session.total_score(), straight.session.total_score());
        assert!(paused.session.total_score() > 0);
    }

    #[test]
    fn test_sensor_disconnect_pauses_and_reconnect_resumes() {
        let mut h = harness(&["hi"], GameConfig::default());
        h.session.start_next_word().unwrap();
        h.clock.advance(Duration::from_secs(1));

        h.session.sensor_status_changed(SensorStatus::Disconnected);
        assert!(h.session.is_paused());
        h.clock.advance(Duration::from_secs(10));
        assert!(!h.session.resume());
        assert!(h.session.is_paused());

        h.session.sensor_status_changed(SensorStatus::Initializing);
        assert!(h.session.is_paused());
        h.session.sensor_status_changed(SensorStatus::Connected);
        assert!(!h.session.is_paused());
        assert_eq!(h.session.timers().word, Duration::from_secs(1));
    }

    #[test]
    fn test_reconnect_keeps_player_pause() {
        let mut h = harness(&["hi"], GameConfig::default());
        h.session.start_next_word().unwrap();
        h.session.pause();
        h.session.sensor_status_changed(SensorStatus::Disconnected);
        h.session.sensor_status_changed(SensorStatus::Connected);
        assert!(h.session.is_paused());
        assert!(h.session.resume());
        assert!(!h.session.is_paused());
    }

    #[test]
    fn test_cannot_start_word_without_sensor() {
        let mut h = harness(&["hi"], GameConfig::default());
        h.session.sensor_status_changed(SensorStatus::Disconnected);
        assert!(matches!(
            h.session.start_next_word(),
            Err(GameError::SensorUnavailable)
        ));
    }

    #[test]
    fn test_no_eligible_word_surfaces() {
        let mut h = harness(&["antidisestablishment"], GameConfig::default());
        for _ in 0..1000 {
            assert!(matches!(
                h.session.next_word(),
                Err(GameError::NoEligibleWord { .. })
            ));
        }
        assert!(h.session.start_next_word().is_err());
    }

    #[test]
    fn test_instant_word_scores_max() {
        let config = GameConfig {
            scoring: ScoringConfig {
                max_score: 900.0,
                char_goal_secs: 21.5,
            },
            ..GameConfig::default()
        };
        let mut h = harness(&["cat", "dog"], config);
        h.session.start_next_word().unwrap();
        for _ in 0..3 {
            h.hold_goal();
        }
        assert!(h.session.word_complete());
        assert_eq!(h.session.score(), 900);
        assert_eq!(h.session.progression().current_index(), 3);

        let completions: Vec<_> = h
            .events
            .drain()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::WordCompleted { .. }))
            .collect();
        assert_eq!(completions.len(), 1);
        assert!(matches!(
            &completions[0],
            GameEvent::WordCompleted { final_score: 900, .. }
        ));
    }

    #[test]
    fn test_total_score_accumulates_across_words() {
        let mut h = harness(&["ab"], GameConfig::default());
        h.session.start_next_word().unwrap();
        h.hold_goal();
        h.hold_goal();
        let first = h.session.score();

        h.session.start_next_word().unwrap();
        assert_eq!(h.session.score(), 0);
        h.clock.advance(Duration::from_secs(5));
        h.hold_goal();
        h.hold_goal();
        let second = h.session.score();

        assert!(second < first);
        assert_eq!(h.session.total_score(), first + second);
        assert_eq!(h.session.words_completed(), 2);
    }

    #[test]
    fn test_character_advanced_carries_history() {
        let mut h = harness(&["go"], GameConfig::default());
        h.session.start_next_word().unwrap();
        h.session.process_frame(&semaphore::neutral_pose());
        h.hold_goal();

        let advanced = h
            .events
            .drain()
            .into_iter()
            .find_map(|e| match e {
                GameEvent::CharacterAdvanced {
                    letter,
                    similarity_history,
                } => Some((letter, similarity_history)),
                _ => None,
            })
            .unwrap();
        assert_eq!(advanced.0, 'O');
        assert_eq!(advanced.1.len(), 16);
        assert_eq!(*advanced.1.last().unwrap(), 100.0);
    }

    #[test]
    fn test_timers_freeze_after_completion() {
        let mut h = harness(&["i"], GameConfig::default());
        h.session.start_next_word().unwrap();
        h.clock.advance(Duration::from_secs(4));
        h.hold_goal();
        h.clock.advance(Duration::from_secs(30));
        assert_eq!(h.session.timers().word, Duration::from_secs(4));
    }
}
