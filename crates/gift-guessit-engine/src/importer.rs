use std::path::Path;

use crate::{
    issues::IssueSink, models::QuestionRecord, options::ImportOptions, parsing::import_text,
};

/// What the host knows about an input before reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDescriptor {
    pub media_type: String,
}

impl InputDescriptor {
    pub const OCTET_STREAM: &'static str = "application/octet-stream";

    pub fn new(media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
        }
    }

    /// Describes a file, guessing its media type from the extension.
    pub fn from_path(path: &Path) -> Self {
        let media_type = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => "text/plain",
            _ => Self::OCTET_STREAM,
        };
        Self::new(media_type)
    }
}

/// A question bank import format.
pub trait QuestionImporter {
    /// Cheap check on the descriptor only; the content is not inspected.
    fn can_import(&self, input: &InputDescriptor) -> bool;

    /// Parses a whole input into zero or more records. Never fails as a whole:
    /// problems with single lines go to `sink`.
    fn import(&self, text: &str, sink: &mut dyn IssueSink) -> Vec<QuestionRecord>;
}

/// Importer for one-line guessit and Wordle questions.
#[derive(Debug, Clone, Default)]
pub struct GuessitImporter {
    options: ImportOptions,
}

impl GuessitImporter {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }
}

impl QuestionImporter for GuessitImporter {
    fn can_import(&self, input: &InputDescriptor) -> bool {
        input.media_type == self.options.accepted_media_type
    }

    fn import(&self, text: &str, sink: &mut dyn IssueSink) -> Vec<QuestionRecord> {
        import_text(text, &self.options, sink)
    }
}
