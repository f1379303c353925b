//! Game tuning constants, overridable from a JSON file
//!
//! Every field has a default, so a config file only needs the values it changes:
//! ```json
//! { "recognition": { "required_frames": 20 }, "max_word_len": 8 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{GameError, Result};

/// Pose debouncing parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Similarity (0-100) a frame needs to count towards the streak
    pub threshold: f64,
    /// Consecutive qualifying frames needed to confirm a pose
    pub required_frames: u32,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        RecognitionConfig {
            threshold: 92.0,
            required_frames: 15,
        }
    }
}

/// Time-based scoring parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score of a word whose letters were all hit instantly
    pub max_score: f64,
    /// Seconds after which a letter scores nothing
    pub char_goal_secs: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            max_score: 1_234_567.0,
            char_goal_secs: 21.5,
        }
    }
}

/// Complete game configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub recognition: RecognitionConfig,
    pub scoring: ScoringConfig,
    /// Longest word the display can show
    pub max_word_len: usize,
    /// Timer label refresh interval
    pub tick_interval_ms: u64,
    /// Synthetic sensor frame interval (about 30 fps)
    pub frame_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            recognition: RecognitionConfig::default(),
            scoring: ScoringConfig::default(),
            max_word_len: 10,
            tick_interval_ms: 10,
            frame_interval_ms: 33,
        }
    }
}

impl GameConfig {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(content: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(GameError::InvalidConfig(msg)) };
        let recognition = &self.recognition;
        if !(0.0..=100.0).contains(&recognition.threshold) {
            return invalid(format!(
                "recognition.threshold must be within 0-100, got {}",
                recognition.threshold
            ));
        }
        if recognition.required_frames == 0 {
            return invalid("recognition.required_frames must be at least 1".to_string());
        }

        let scoring = &self.scoring;
        if !scoring.max_score.is_finite() || scoring.max_score < 0.0 {
            return invalid(format!(
                "scoring.max_score must be a non-negative number, got {}",
                scoring.max_score
            ));
        }
        if !scoring.char_goal_secs.is_finite() || scoring.char_goal_secs <= 0.0 {
            return invalid(format!(
                "scoring.char_goal_secs must be positive, got {}",
                scoring.char_goal_secs
            ));
        }

        if self.max_word_len == 0 {
            return invalid("max_word_len must be at least 1".to_string());
        }
        if self.tick_interval_ms == 0 || self.frame_interval_ms == 0 {
            return invalid("tick_interval_ms and frame_interval_ms must be positive".to_string());
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.recognition.threshold, 92.0);
        assert_eq!(config.recognition.required_frames, 15);
        assert_eq!(config.scoring.max_score, 1_234_567.0);
        assert_eq!(config.scoring.char_goal_secs, 21.5);
        assert_eq!(config.max_word_len, 10);
        assert_eq!(config.tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "recognition": { "required_frames": 20 }, "max_word_len": 8 }"#)
                .unwrap();
        assert_eq!(config.recognition.required_frames, 20);
        assert_eq!(config.recognition.threshold, 92.0);
        assert_eq!(config.max_word_len, 8);
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::from_json("{}").is_ok());
    }

    #[test]
    fn test_rejects_unusable_values() {
        let cases = [
            r#"{ "recognition": { "required_frames": 0 } }"#,
            r#"{ "recognition": { "threshold": 120.0 } }"#,
            r#"{ "recognition": { "threshold": -1.0 } }"#,
            r#"{ "scoring": { "char_goal_secs": 0.0 } }"#,
            r#"{ "scoring": { "char_goal_secs": -3.5 } }"#,
            r#"{ "scoring": { "max_score": -10.0 } }"#,
            r#"{ "max_word_len": 0 }"#,
            r#"{ "tick_interval_ms": 0 }"#,
        ];
        for case in cases {
            assert!(
                matches!(GameConfig::from_json(case), Err(GameError::InvalidConfig(_))),
                "accepted {}",
                case
            );
        }
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let config = GameConfig {
            recognition: RecognitionConfig {
                threshold: f64::NAN,
                required_frames: 15,
            },
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_validates() {
        let path = std::env::temp_dir().join(format!("spellotron-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "recognition": { "required_frames": 0 } }"#).unwrap();
        let result = GameConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }
}
