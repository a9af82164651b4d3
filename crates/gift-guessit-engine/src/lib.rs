pub mod importer;
pub mod io;
pub mod issues;
pub mod models;
pub mod options;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use importer::{GuessitImporter, InputDescriptor, QuestionImporter};
pub use io::*;
pub use issues::{ImportIssue, IssueClass, IssueSink, ReportedIssue, Severity};
pub use models::*;
pub use options::ImportOptions;
pub use parsing::import_text;
