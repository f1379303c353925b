//! Game logic: word progression, scoring and session control
//!
//! # Components
//! - `progression.rs`: Per-word state machine and time-based scoring
//! - `session.rs`: GameSession frame pipeline, pause/resume, totals
//! - `words.rs`: Word pools per level and random word selection
//! - `events.rs`: Semantic events for UI and audio front-ends

pub mod events;
pub mod progression;
pub mod session;
pub mod words;

pub use events::{EventLog, GameEvent, GameEventSink, LogEventSink, NoopEventSink, SensorStatus};
pub use progression::{Advance, CharacterScore, ProgressPhase, WordProgression};
pub use session::{FrameOutcome, GameSession, TimerSnapshot};
pub use words::{level_name, WordBank, WordPicker};
