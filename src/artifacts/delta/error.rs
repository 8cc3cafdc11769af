use thiserror::Error;

/// Reasons a delta cannot be applied to a source text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeltaError {
    #[error("invalid length in delta token: {0:?}")]
    InvalidLength(String),

    #[error("invalid escape sequence in delta token: {0:?}")]
    InvalidEscape(String),

    #[error("unknown operation {0:?} in delta")]
    UnknownOperation(char),

    /// The delta accounts for a different number of source chars than given
    #[error("delta length ({consumed}) does not match source text length ({expected})")]
    LengthMismatch { consumed: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, DeltaError>;
