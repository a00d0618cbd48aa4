use serde::Serialize;

/// Source captioning format inferred from a file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceFormat {
    WebVtt,
    SubRip,
    Plain,
}

impl SourceFormat {
    pub fn name(&self) -> &str {
        match self {
            SourceFormat::WebVtt => "WebVTT",
            SourceFormat::SubRip => "SubRip",
            SourceFormat::Plain => "plain text",
        }
    }

    /// Whether the format carries cue structure that must be stripped
    pub fn is_structured(&self) -> bool {
        matches!(self, SourceFormat::WebVtt | SourceFormat::SubRip)
    }
}
