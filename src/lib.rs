//! Spellotron - spell words by holding letter poses in front of a motion sensor
//!
//! The crate holds the recognition and progression engine. Sensor drivers,
//! rendering and audio stay outside: they feed `PoseSample`s in and consume
//! `GameEvent`s out.
//!
//! ```text
//! PoseSample -> PoseComparator -> RecognitionDebouncer -> WordProgression
//!                                                        \-> GameSession -> GameEvent
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod pose;
pub mod recognition;
pub mod timing;

pub use config::{GameConfig, RecognitionConfig, ScoringConfig};
pub use error::GameError;
pub use game::{
    Advance, EventLog, FrameOutcome, GameEvent, GameEventSink, GameSession, SensorStatus,
    WordBank, WordPicker, WordProgression,
};
pub use pose::{Joint, JointId, LetterPose, PoseComparator, PoseLibrary, PoseSample, Position};
pub use recognition::{PoseConfirmed, RecognitionDebouncer};
pub use timing::{Clock, ManualClock, SystemClock};
