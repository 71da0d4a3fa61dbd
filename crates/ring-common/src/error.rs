//! Error types for ring-imaging operations.

use thiserror::Error;

/// Result type alias using RingError.
pub type RingResult<T> = Result<T, RingError>;

/// Primary error type for cube inspection and rendering.
#[derive(Debug, Error)]
pub enum RingError {
    // === Label Errors ===
    #[error("Missing required keyword: {0}")]
    MissingKeyword(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Data Errors ===
    #[error("Failed to decode cube: {0}")]
    UnreadableCube(String),

    #[error("Image contains no valid pixels")]
    NoValidPixels,

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RingError {
    /// Build an `InvalidParameter` error without spelling out both fields.
    pub fn invalid_parameter(param: &str, message: impl Into<String>) -> Self {
        RingError::InvalidParameter {
            param: param.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RingError::MissingKeyword("IsisCube/Mapping/PixelResolution".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required keyword: IsisCube/Mapping/PixelResolution"
        );

        let err = RingError::invalid_parameter("low_percentile", "must be in 0..=100");
        assert!(err.to_string().contains("low_percentile"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RingError = io_err.into();
        assert!(matches!(err, RingError::Io(_)));
    }
}
