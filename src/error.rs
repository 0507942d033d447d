use thiserror::Error;

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, LearnError>;

/// Errors reported by models, datasets and metrics.
///
/// Every check runs before any state is touched, so a call that fails
/// leaves the model exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LearnError {
    /// An input vector (or dataset row width) doesn't match the model's feature count.
    #[error("dimension mismatch: expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Two sequences that must be paired element-wise have different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Both line coefficients are zero, there is no separating line.
    #[error("degenerate decision boundary: w1 and w2 are both zero")]
    DegenerateBoundary,

    /// A perceptron target outside of {+1, -1}.
    #[error("invalid label {0}: labels must be -1 or +1")]
    InvalidLabel(f64),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("input must not be empty")]
    EmptyInput,
}

impl LearnError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LearnError::DimensionMismatch { expected: 2, got: 3 };
        assert_eq!(err.to_string(), "dimension mismatch: expected 2 features, got 3");

        let err = LearnError::invalid("learning_rate must be > 0");
        assert_eq!(err.to_string(), "invalid parameter: learning_rate must be > 0");
    }
}
