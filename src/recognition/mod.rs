//! Recognition: frame-level similarity to confirmed poses
//!
//! - `debouncer.rs`: Consecutive-frame streak filter

pub mod debouncer;

pub use debouncer::{Observation, PoseConfirmed, RecognitionDebouncer};
