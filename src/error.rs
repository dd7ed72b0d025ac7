use thiserror::Error;

/// Errors surfaced by option validation and the word source.
#[derive(Debug, Error)]
pub enum Error {
    /// Word length bounds beyond what the bundled dictionary can serve.
    #[error("word length bounds cannot exceed {max}, got {got}")]
    WordLengthOutOfRange { max: usize, got: usize },

    #[error("minimum word length {min} exceeds maximum word length {max}")]
    WordLengthBoundsInverted { min: usize, max: usize },

    #[error("capitalization ratio must lie strictly between 0 and 1, got {0}")]
    CapRatioOutOfRange(f32),

    #[error("leet ratio must lie between 0 and 1 inclusive, got {0}")]
    LeetRatioOutOfRange(f32),

    #[error("dictionary has no words between {min} and {max} characters")]
    NoWordsInRange { min: usize, max: usize },
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
