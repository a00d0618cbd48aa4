pub mod transcript;
pub use transcript::{detect_format, normalize, normalize_srt, normalize_vtt, SourceFormat};

pub mod upload;
pub use upload::{format_file_size, validate_file_name, UploadInfo, ACCEPTED_EXTENSIONS};

pub mod compose;
pub use compose::{CallFeedbackRequest, NextStepRequest, RelationshipType};

pub mod errors;
pub use errors::{ComposeError, TranscriptParserError, TranscriptParserResult, UploadError};

use log::info;

/// Validate an uploaded file name, then normalize its content
///
/// This is the upload-to-chat pipeline in one call: the file name is checked
/// against the accepted extension allowlist, and accepted content is reduced
/// to plain transcript text ready for message composition.
pub fn ingest_upload(content: &str, file_name: &str) -> TranscriptParserResult<String> {
    upload::validate_file_name(file_name)?;
    let normalized = transcript::normalize(content, file_name);
    info!(
        "Ingested '{}' ({} normalized chars)",
        file_name,
        normalized.len()
    );
    Ok(normalized)
}
