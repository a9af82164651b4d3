use serde::{Deserialize, Serialize};

use crate::models::GapSizeDisplay;

/// Tunables of an import. Every field has a default, so a partial `[import]`
/// table in the config file is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Media type the importer accepts, compared for equality.
    pub accepted_media_type: String,
    /// Values accepted in the `[n]` try-count modifier.
    pub allowed_tries: Vec<u32>,
    pub multi_gap_default_tries: u32,
    pub wordle_default_tries: u32,
    /// Longer Wordle words are kept but reported.
    pub wordle_max_length: usize,
    pub gap_size_display: GapSizeDisplay,
    pub remove_specific_feedback: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            accepted_media_type: "text/plain".to_string(),
            allowed_tries: vec![6, 8, 10, 12, 14],
            multi_gap_default_tries: 6,
            wordle_default_tries: 10,
            wordle_max_length: 8,
            gap_size_display: GapSizeDisplay::Grow,
            remove_specific_feedback: false,
        }
    }
}

impl ImportOptions {
    pub fn allows_tries(&self, tries: u32) -> bool {
        self.allowed_tries.contains(&tries)
    }

    /// Comma separated list of the allowed try counts, for issue messages.
    pub fn allowed_tries_list(&self) -> String {
        self.allowed_tries
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
