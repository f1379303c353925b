//! Timing: injectable clocks and pause-aware stopwatches

pub mod clock;
pub mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use stopwatch::{format_clock, Stopwatch};
