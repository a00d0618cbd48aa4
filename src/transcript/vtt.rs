use super::classify::{classify_vtt_line, strip_vtt_tags, LineClass};

/// Cue-tracking states for the WebVTT line scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CueState {
    /// Between cues; bare text is only accepted once output has started
    AwaitingCue,
    /// After a timing line; following lines are cue payload
    InCue,
}

/// Convert WebVTT content to plain text
///
/// Removes the WEBVTT header, NOTE comments, cue identifiers, timing lines,
/// and styling markup, keeping only spoken lines in their original order.
/// Total over any string input; malformed cues degrade to dropped lines.
pub fn normalize_vtt(content: &str) -> String {
    let mut text_lines: Vec<String> = Vec::new();
    let mut state = CueState::AwaitingCue;

    for line in content.lines() {
        let trimmed = line.trim();

        match classify_vtt_line(trimmed) {
            LineClass::Header => {}
            LineClass::CueIdentifier => {}
            LineClass::Timing => state = CueState::InCue,
            LineClass::Blank => state = CueState::AwaitingCue,
            LineClass::Text => {
                // The non-empty-output condition tolerates content blocks
                // that began without strict header or identifier lines.
                if state == CueState::InCue || !text_lines.is_empty() {
                    let cleaned = strip_vtt_tags(trimmed);
                    if !cleaned.is_empty() {
                        text_lines.push(cleaned);
                    }
                }
            }
        }
    }

    text_lines.join("\n")
}
