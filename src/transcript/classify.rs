use regex::Regex;
use std::sync::OnceLock;

/// Classification buckets for a single trimmed transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineClass {
    /// WEBVTT header or NOTE comment
    Header,
    /// Timing range line, e.g. "00:00:00.000 --> 00:00:02.000"
    Timing,
    /// Cue identifier: a sequence number or a named identifier
    CueIdentifier,
    /// Blank line separating cues
    Blank,
    /// Spoken caption text
    Text,
}

type ClassRule = (fn(&str) -> bool, LineClass);

// Rules are checked top to bottom; the first match wins. A line matching
// no rule is caption text.
const VTT_RULES: &[ClassRule] = &[
    (is_vtt_header, LineClass::Header),
    (is_timing_line, LineClass::Timing),
    (is_cue_identifier, LineClass::CueIdentifier),
    (is_blank, LineClass::Blank),
];

const SRT_RULES: &[ClassRule] = &[
    (is_sequence_number, LineClass::CueIdentifier),
    (is_timing_line, LineClass::Timing),
    (is_blank, LineClass::Blank),
];

pub(crate) fn classify_vtt_line(trimmed: &str) -> LineClass {
    classify(trimmed, VTT_RULES)
}

pub(crate) fn classify_srt_line(trimmed: &str) -> LineClass {
    classify(trimmed, SRT_RULES)
}

fn classify(trimmed: &str, rules: &[ClassRule]) -> LineClass {
    for (matches, class) in rules.iter() {
        if matches(trimmed) {
            return *class;
        }
    }
    LineClass::Text
}

fn is_vtt_header(line: &str) -> bool {
    line.starts_with("WEBVTT") || line.starts_with("NOTE")
}

fn is_timing_line(line: &str) -> bool {
    line.contains("-->")
}

/// A sequence number is a non-empty run of ASCII digits and nothing else.
/// A caption consisting solely of digits is indistinguishable from one and
/// is discarded with it.
fn is_sequence_number(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

fn is_cue_identifier(line: &str) -> bool {
    is_sequence_number(line) || named_identifier_regex().is_match(line)
}

fn is_blank(line: &str) -> bool {
    line.is_empty()
}

/// Named cue identifiers start with a letter followed by word characters or
/// hyphens only. Punctuation or spaces disqualify the line.
fn named_identifier_regex() -> &'static Regex {
    static NAMED_IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();
    NAMED_IDENTIFIER_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z][\w-]*$").expect("Failed to compile identifier regex")
    })
}

fn voice_tag_regex() -> &'static Regex {
    static VOICE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    VOICE_TAG_REGEX
        .get_or_init(|| Regex::new(r"(?i)<v\s+[^>]*>|</v>").expect("Failed to compile voice regex"))
}

fn class_tag_regex() -> &'static Regex {
    static CLASS_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    CLASS_TAG_REGEX
        .get_or_init(|| Regex::new(r"(?i)<c\.[^>]*>|</c>").expect("Failed to compile class regex"))
}

fn angle_tag_regex() -> &'static Regex {
    static ANGLE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    ANGLE_TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]+>").expect("Failed to compile tag regex"))
}

fn brace_tag_regex() -> &'static Regex {
    static BRACE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    BRACE_TAG_REGEX
        .get_or_init(|| Regex::new(r"\{[^}]+\}").expect("Failed to compile brace regex"))
}

/// Strip WebVTT styling markup: voice spans, class spans, then any
/// remaining angle-bracket tag.
pub(crate) fn strip_vtt_tags(line: &str) -> String {
    let line = voice_tag_regex().replace_all(line, "");
    let line = class_tag_regex().replace_all(&line, "");
    angle_tag_regex().replace_all(&line, "").into_owned()
}

/// Strip HTML-style tags and brace-delimited styling overrides from an
/// SRT caption line.
pub(crate) fn strip_srt_tags(line: &str) -> String {
    let line = angle_tag_regex().replace_all(line, "");
    brace_tag_regex().replace_all(&line, "").into_owned()
}
