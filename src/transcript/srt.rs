use super::classify::{classify_srt_line, strip_srt_tags, LineClass};

/// Convert SubRip content to plain text
///
/// Drops sequence numbers, timing lines, and blank cue separators. Inline
/// HTML-style tags and brace-delimited styling overrides are stripped from
/// the remaining caption lines. No cue state is tracked; every line is
/// classified on its own.
pub fn normalize_srt(content: &str) -> String {
    let mut text_lines: Vec<String> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();

        if classify_srt_line(trimmed) != LineClass::Text {
            continue;
        }

        let cleaned = strip_srt_tags(trimmed);
        if !cleaned.is_empty() {
            text_lines.push(cleaned);
        }
    }

    text_lines.join("\n")
}
