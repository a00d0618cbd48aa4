use crate::errors::UploadError;
use log::warn;

/// File extensions the upload surface accepts, lower-case, without the dot
pub const ACCEPTED_EXTENSIONS: &[&str] = &["txt", "vtt", "srt"];

/// Check an uploaded file name against the accepted extension allowlist
///
/// The comparison is case-insensitive. Names without an extension are
/// rejected here even though `normalize` would still handle them: the
/// picker-level contract only admits the three known extensions.
pub fn validate_file_name(file_name: &str) -> Result<(), UploadError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => {
            warn!("Rejected upload '{}': unsupported file type", file_name);
            Err(UploadError::new(
                "Invalid file type. Please upload .txt, .vtt, .srt files.",
            ))
        }
    }
}
