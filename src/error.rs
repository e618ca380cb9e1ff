//! Error handling for the resume checker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeCheckerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Word document extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not extract meaningful content: {0}")]
    EmptyDocument(String),

    #[error("File is too large: {size} bytes (limit is {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeCheckerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeCheckerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeCheckerError::Processing(err.to_string())
    }
}

impl ResumeCheckerError {
    /// Errors the user can fix by supplying a different document
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ResumeCheckerError::UnsupportedFormat(_)
                | ResumeCheckerError::InvalidInput(_)
                | ResumeCheckerError::EmptyDocument(_)
                | ResumeCheckerError::FileTooLarge { .. }
                | ResumeCheckerError::PdfExtraction(_)
                | ResumeCheckerError::DocxExtraction(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_message() {
        let err = ResumeCheckerError::FileTooLarge { size: 20, limit: 10 };
        assert_eq!(err.to_string(), "File is too large: 20 bytes (limit is 10 bytes)");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_anyhow_maps_to_processing() {
        let err: ResumeCheckerError = anyhow::anyhow!("matcher exploded").into();
        assert!(matches!(err, ResumeCheckerError::Processing(ref msg) if msg == "matcher exploded"));
    }

    #[test]
    fn test_configuration_is_not_user_error() {
        let err = ResumeCheckerError::Configuration("bad".to_string());
        assert!(!err.is_user_error());
    }
}
