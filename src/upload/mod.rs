mod utils;
mod validate;

pub use utils::format_file_size;
pub use validate::{validate_file_name, ACCEPTED_EXTENSIONS};

use serde::Serialize;

/// Name and size of an accepted upload, kept for display
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UploadInfo {
    pub name: String,
    pub size: u64,
}

impl UploadInfo {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// One-line description, e.g. "call.vtt (12.3 KB)"
    pub fn summary(&self) -> String {
        format!("{} ({})", self.name, format_file_size(self.size))
    }
}
