use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxavatar operations
#[derive(Error, Diagnostic, Debug)]
pub enum AvatarError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxavatar::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxavatar::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxavatar::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(pxavatar::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported generator type: {0}")]
    #[diagnostic(
        code(pxavatar::validate::generator),
        help("Supported types: pixelize, wave, gradient")
    )]
    UnsupportedGeneratorType(String),

    #[error("Render cancelled at {size}x{size}")]
    #[diagnostic(code(pxavatar::cancelled))]
    Cancelled { size: u32 },

    #[error("Codec error: {message}")]
    #[diagnostic(code(pxavatar::codec))]
    Codec { message: String },

    #[error("Avatar not found: {id}")]
    #[diagnostic(code(pxavatar::not_found))]
    NotFound { id: String },
}

impl AvatarError {
    /// Shorthand for a validation error without help text.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            help: None,
        }
    }

    /// Check if this error is caller-surfaced input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AvatarError::Validation { .. } | AvatarError::UnsupportedGeneratorType(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AvatarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_message() {
        let err = AvatarError::UnsupportedGeneratorType("sparkle".to_string());
        insta::assert_snapshot!(err.to_string(), @"Unsupported generator type: sparkle");
        assert!(err.is_validation());
    }

    #[test]
    fn test_cancelled_is_not_validation() {
        let err = AvatarError::Cancelled { size: 512 };
        assert_eq!(err.to_string(), "Render cancelled at 512x512");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_io_from() {
        let err: AvatarError = std::io::Error::other("boom").into();
        assert!(err.to_string().contains("boom"));
    }
}
