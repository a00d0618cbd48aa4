mod classify;
mod detector;
mod srt;
mod types;
mod vtt;

pub use detector::detect_format;
pub use srt::normalize_srt;
pub use types::SourceFormat;
pub use vtt::normalize_vtt;


use log::debug;

/// Normalize uploaded transcript content based on the file name extension
///
/// Total over any string input: unrecognized or absent extensions degrade
/// to a trim-only pass-through, and malformed cue structure degrades to
/// dropped lines, never to an error.
pub fn normalize(content: &str, file_name: &str) -> String {
    let format = detect_format(file_name);
    debug!("Detected {} format for '{}'", format.name(), file_name);

    match format {
        SourceFormat::WebVtt => normalize_vtt(content),
        SourceFormat::SubRip => normalize_srt(content),
        SourceFormat::Plain => content.trim().to_string(),
    }
}
