//! Error types for synthetic data generation.

/// Broad classification of a generation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input's type does not match its contract.
    Type,
    /// The type is right but the value violates a range or sign constraint.
    Value,
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, SynthError>;

/// Errors raised before any randomness is consumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthError {
    #[error("count must be an integer")]
    CountNotInteger,

    #[error("count must be non-negative")]
    NegativeCount,

    #[error("count exceeds the addressable table size")]
    CountTooLarge,

    #[error("seed must be an integer or unset")]
    SeedNotInteger,

    #[error("seed must be non-negative")]
    NegativeSeed,

    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}

impl SynthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SynthError::CountNotInteger | SynthError::SeedNotInteger => ErrorKind::Type,
            SynthError::NegativeCount
            | SynthError::CountTooLarge
            | SynthError::NegativeSeed
            | SynthError::InvalidConfig(_) => ErrorKind::Value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(SynthError::CountNotInteger.to_string(), "count must be an integer");
        assert_eq!(SynthError::NegativeCount.to_string(), "count must be non-negative");
        assert_eq!(
            SynthError::SeedNotInteger.to_string(),
            "seed must be an integer or unset"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(SynthError::CountNotInteger.kind(), ErrorKind::Type);
        assert_eq!(SynthError::SeedNotInteger.kind(), ErrorKind::Type);
        assert_eq!(SynthError::NegativeCount.kind(), ErrorKind::Value);
        assert_eq!(SynthError::NegativeSeed.kind(), ErrorKind::Value);
        assert_eq!(SynthError::InvalidConfig("x".into()).kind(), ErrorKind::Value);
    }
}
