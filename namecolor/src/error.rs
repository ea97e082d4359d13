use thiserror::Error;

/// Errors originating from the `namecolor` parsing surfaces.
///
/// Computing a color never fails and a description that matches nothing is
/// reported as `None`, so only string conversions produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("unknown palette era: {0:?}")]
    UnknownEra(String),
}

pub type Result<T> = std::result::Result<T, NameColorError>;
