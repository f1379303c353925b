//! CLI Interface: User input, terminal rendering and a stand-in sensor
//!
//! # Components
//! - `input.rs`: Keystroke capture using crossterm
//! - `display.rs`: Terminal rendering and UI
//! - `sensor.rs`: Synthetic skeleton frames

pub mod display;
pub mod input;
pub mod sensor;
