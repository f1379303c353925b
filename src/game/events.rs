//! Semantic game events and the sinks that receive them
//!
//! The core never touches presentation state. Front-ends implement
//! `GameEventSink` (or drain an `EventLog`) to drive labels, sounds and the
//! end-of-word summary.

use parking_lot::Mutex;
use std::time::Duration;

/// Sensor connection state as reported by the driver layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorStatus {
    Connected,
    Initializing,
    Disconnected,
}

/// Events emitted by a game session
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// A new word is ready and its first letter is the goal
    WordStarted { word: String, first_letter: char },
    /// The goal pose was held long enough
    PoseConfirmed { letter: char },
    /// Points awarded for a finished letter
    CharacterScored {
        letter: char,
        elapsed: Duration,
        contribution: u64,
        score: u64,
    },
    /// The goal moved to the next letter
    CharacterAdvanced {
        letter: char,
        /// Per-frame similarity against the letter just finished
        similarity_history: Vec<f64>,
    },
    /// Last letter done
    WordCompleted {
        word: String,
        final_score: u64,
        elapsed: Duration,
    },
    Paused,
    Resumed { paused_for: Duration },
    SensorStatusChanged { status: SensorStatus },
}

/// Trait for receiving game events
pub trait GameEventSink: Send + Sync {
    fn on_event(&self, event: GameEvent);
}

/// Discards everything
pub struct NoopEventSink;
impl GameEventSink for NoopEventSink {
    fn on_event(&self, _event: GameEvent) {}
}

/// Writes events to the log
pub struct LogEventSink;
impl GameEventSink for LogEventSink {
    fn on_event(&self, event: GameEvent) {
        log_event(&event);
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::WordStarted { word, first_letter } => {
            log::info!("[Game] Word '{}' started, first letter {}", word, first_letter)
        }
        GameEvent::PoseConfirmed { letter } => log::info!("[Game] Pose {} confirmed", letter),
        GameEvent::CharacterScored {
            letter,
            elapsed,
            contribution,
            score,
        } => log::debug!(
            "[Game] {} scored {} in {:.2}s (total {})",
            letter,
            contribution,
            elapsed.as_secs_f64(),
            score
        ),
        GameEvent::CharacterAdvanced {
            letter,
            similarity_history,
        } => log::debug!(
            "[Game] Next letter {} ({} frames on previous)",
            letter,
            similarity_history.len()
        ),
        GameEvent::WordCompleted {
            word,
            final_score,
            elapsed,
        } => log::info!(
            "[Game] Word '{}' completed: {} points in {:.2}s",
            word,
            final_score,
            elapsed.as_secs_f64()
        ),
        GameEvent::Paused => log::info!("[Game] Paused"),
        GameEvent::Resumed { paused_for } => {
            log::info!("[Game] Resumed after {:.2}s", paused_for.as_secs_f64())
        }
        GameEvent::SensorStatusChanged { status } => {
            log::warn!("[Game] Sensor status: {:?}", status)
        }
    }
}

/// Buffers events for a front-end to drain on its own schedule
#[derive(Default)]
pub struct EventLog {
    events: Mutex<Vec<GameEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all buffered events, oldest first
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl GameEventSink for EventLog {
    fn on_event(&self, event: GameEvent) {
        log_event(&event);
        self.events.lock().push(event);
    }
}
