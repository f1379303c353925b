//! Error types for the game core and its resource loaders

/// Errors raised by the game core
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Invalid word '{word}': must be 1-{max_len} letters A-Z")]
    InvalidWord { word: String, max_len: usize },

    #[error("No eligible word in a list of {total} entries")]
    NoEligibleWord { total: usize },

    #[error("No word list configured for level {0}")]
    EmptyWordList(u32),

    #[error("Pose library has no pose for letter '{0}'")]
    MissingLetterPose(char),

    #[error("Pose library is incomplete, missing letters: {missing:?}")]
    IncompleteLibrary { missing: Vec<char> },

    #[error("Game is paused")]
    SessionPaused,

    #[error("Motion sensor is not connected")]
    SensorUnavailable,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
