//! Per-line import issues and the sink that receives them.
//!
//! The engine never prints anything itself: every rejected line, warning and
//! notice is handed to an [`IssueSink`] together with the physical line number
//! it came from. Hosts decide how to render them.

use serde::Serialize;
use thiserror::Error;

/// How an issue affects the line it was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational only.
    Notice,
    /// The record is still produced.
    Warning,
    /// The line produced no record.
    Rejection,
}

/// Stable identifier of an issue, independent of its context values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueClass {
    BraceError,
    BracketsError,
    NoName,
    NoGuessitGaps,
    NbTriesError,
    WordleCapitalsOnly,
    WordleTooLong,
    NoDescriptionProvided,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum ImportIssue {
    #[error("Could not find a pair of {{...}} around word(s) to be guessed -> {line}")]
    BraceError { line: String },

    #[error("Incorrectly matched square brackets in this question -> {line}")]
    BracketsError { line: String },

    #[error("No name provided or badly formatted colons for this question -> {line}")]
    NoName { line: String },

    #[error("Could not find word(s) to be guessed in question -> {line}")]
    NoGuessitGaps { line: String },

    #[error("Number of tries {nb_tries} not in correct range: {allowed} -> {line}")]
    NbTriesError {
        nb_tries: String,
        allowed: String,
        line: String,
    },

    #[error("In the Wordle option only a single word of UPPERCASE LETTERS (A-Z) is accepted -> {line}")]
    WordleCapitalsOnly { line: String },

    #[error("In the Wordle option words are limited to {max_length} characters -> {line}")]
    WordleTooLong { max_length: usize, line: String },

    #[error("No description provided for question n°{question_number} -> {question_name}")]
    NoDescriptionProvided {
        question_number: u32,
        question_name: String,
    },
}

impl ImportIssue {
    pub fn class(&self) -> IssueClass {
        match self {
            Self::BraceError { .. } => IssueClass::BraceError,
            Self::BracketsError { .. } => IssueClass::BracketsError,
            Self::NoName { .. } => IssueClass::NoName,
            Self::NoGuessitGaps { .. } => IssueClass::NoGuessitGaps,
            Self::NbTriesError { .. } => IssueClass::NbTriesError,
            Self::WordleCapitalsOnly { .. } => IssueClass::WordleCapitalsOnly,
            Self::WordleTooLong { .. } => IssueClass::WordleTooLong,
            Self::NoDescriptionProvided { .. } => IssueClass::NoDescriptionProvided,
        }
    }

    pub fn severity(&self) -> Severity {
        match self.class() {
            IssueClass::NoDescriptionProvided => Severity::Notice,
            IssueClass::NbTriesError | IssueClass::WordleTooLong => Severity::Warning,
            IssueClass::BraceError
            | IssueClass::BracketsError
            | IssueClass::NoName
            | IssueClass::NoGuessitGaps
            | IssueClass::WordleCapitalsOnly => Severity::Rejection,
        }
    }
}

/// An issue together with the 1-based physical line it was raised for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedIssue {
    pub line_number: usize,
    #[serde(flatten)]
    pub issue: ImportIssue,
}

/// Receives every issue raised during an import.
pub trait IssueSink {
    fn report(&mut self, line_number: usize, issue: ImportIssue);
}

impl IssueSink for Vec<ReportedIssue> {
    fn report(&mut self, line_number: usize, issue: ImportIssue) {
        self.push(ReportedIssue { line_number, issue });
    }
}

impl<F> IssueSink for F
where
    F: FnMut(usize, ImportIssue),
{
    fn report(&mut self, line_number: usize, issue: ImportIssue) {
        self(line_number, issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ImportIssue::BraceError { line: "x".into() }, Severity::Rejection)]
    #[case(ImportIssue::BracketsError { line: "x".into() }, Severity::Rejection)]
    #[case(ImportIssue::NoName { line: "x".into() }, Severity::Rejection)]
    #[case(ImportIssue::NoGuessitGaps { line: "x".into() }, Severity::Rejection)]
    #[case(ImportIssue::WordleCapitalsOnly { line: "x".into() }, Severity::Rejection)]
    #[case(
        ImportIssue::NbTriesError { nb_tries: "7".into(), allowed: "6, 8".into(), line: "x".into() },
        Severity::Warning
    )]
    #[case(ImportIssue::WordleTooLong { max_length: 8, line: "x".into() }, Severity::Warning)]
    #[case(
        ImportIssue::NoDescriptionProvided { question_number: 1, question_name: "x".into() },
        Severity::Notice
    )]
    fn severity_per_class(#[case] issue: ImportIssue, #[case] expected: Severity) {
        assert_eq!(issue.severity(), expected);
    }

    #[test]
    fn message_carries_context() {
        let issue = ImportIssue::NbTriesError {
            nb_tries: "7".into(),
            allowed: "6, 8, 10, 12, 14".into(),
            line: "{alpha beta [7]}".into(),
        };
        assert_eq!(
            issue.to_string(),
            "Number of tries 7 not in correct range: 6, 8, 10, 12, 14 -> {alpha beta [7]}"
        );
    }

    #[test]
    fn vec_sink_records_line_numbers() {
        let mut sink: Vec<ReportedIssue> = Vec::new();
        sink.report(3, ImportIssue::NoName { line: "::x".into() });
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].line_number, 3);
        assert_eq!(sink[0].issue.class(), IssueClass::NoName);
    }

    #[test]
    fn closure_sink() {
        let mut seen = Vec::new();
        let mut sink = |n: usize, issue: ImportIssue| seen.push((n, issue.class()));
        sink.report(7, ImportIssue::BraceError { line: "x".into() });
        assert_eq!(seen, vec![(7, IssueClass::BraceError)]);
    }
}
