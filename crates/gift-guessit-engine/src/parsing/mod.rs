//! # Guessit Line Parsing
//!
//! Two stages turn an imported text file into question records.
//!
//! ## Stages
//!
//! 1. **Splitting** (`split`): the text is cut into logical lines (`lines`),
//!    each line is classified on its own (`classify`), and only category and
//!    question lines survive.
//!
//! 2. **Parsing** (`session`, `parser`): a `ParseSession` walks the surviving
//!    lines in order, keeps the running question number and category tag, and
//!    hands question lines to the `QuestionLineParser`.
//!
//! ## Modules
//!
//! - **`kinds`**: syntax knowledge per line kind (`Category`, `Comment`,
//!   `QuestionLine`, `Wordle`)
//! - **`snapshot`**: stable views and invariant checks used by tests
//!
//! ## Key Invariants
//!
//! - One bad line never stops the import; it only produces an issue
//! - Output order matches input order
//! - Every question record has a non-empty, colon-free name

pub mod classify;
pub mod kinds;
pub mod lines;
pub mod parser;
pub mod session;
pub mod snapshot;
pub mod split;

#[cfg(test)]
mod tests;

use crate::{issues::IssueSink, models::QuestionRecord, options::ImportOptions};

pub use parser::{ParseOutcome, QuestionContext, QuestionLineParser};
pub use session::ParseSession;
pub use split::{RecordLine, RecordLineKind, split};

/// Imports a whole text, reporting every issue to `sink`.
pub fn import_text(
    text: &str,
    options: &ImportOptions,
    sink: &mut dyn IssueSink,
) -> Vec<QuestionRecord> {
    let mut session = ParseSession::new(options);
    let mut records = Vec::new();

    for line in split(text) {
        match session.parse(&line) {
            Ok(outcome) => {
                for issue in outcome.issues {
                    sink.report(line.number, issue);
                }
                records.push(outcome.record);
            }
            Err(issue) => {
                log::debug!("line {}: rejected ({:?})", line.number, issue.class());
                sink.report(line.number, issue);
            }
        }
    }

    records
}
