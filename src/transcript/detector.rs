use super::types::SourceFormat;

/// Detect the transcript format from a file name extension
///
/// Only the substring after the last `.` is considered, case-insensitively.
/// Anything other than `vtt` or `srt` (including a missing extension) is
/// treated as already-plain text. File content is never inspected.
pub fn detect_format(file_name: &str) -> SourceFormat {
    let extension = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return SourceFormat::Plain,
    };

    match extension.as_str() {
        "vtt" => SourceFormat::WebVtt,
        "srt" => SourceFormat::SubRip,
        _ => SourceFormat::Plain,
    }
}
