use std::error::Error;
use std::fmt;

/// Enumeration of all possible errors that can occur in the transcript parser
#[derive(Debug)]
pub enum TranscriptParserError {
    Upload(UploadError),
    Compose(ComposeError),
}

/// Upload validation specific errors
#[derive(Debug)]
pub struct UploadError {
    pub message: String,
}

impl UploadError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Message composition specific errors
#[derive(Debug)]
pub struct ComposeError {
    pub message: String,
}

impl ComposeError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TranscriptParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptParserError::Upload(err) => write!(f, "Upload error: {}", err),
            TranscriptParserError::Compose(err) => write!(f, "Compose error: {}", err),
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for TranscriptParserError {}
impl Error for UploadError {}
impl Error for ComposeError {}

// Conversion implementations
impl From<UploadError> for TranscriptParserError {
    fn from(err: UploadError) -> Self {
        TranscriptParserError::Upload(err)
    }
}

impl From<ComposeError> for TranscriptParserError {
    fn from(err: ComposeError) -> Self {
        TranscriptParserError::Compose(err)
    }
}

// Type alias for Result with TranscriptParserError
pub type TranscriptParserResult<T> = Result<T, TranscriptParserError>;
