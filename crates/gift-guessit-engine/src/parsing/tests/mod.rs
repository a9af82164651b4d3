//! Integration tests for the parsing module.
//!
//! Fixtures (.txt) live in `fixtures/`; expectations are spelled out here.

use pretty_assertions::assert_eq;

use crate::{
    issues::{IssueClass, ReportedIssue},
    models::QuestionRecord,
    options::ImportOptions,
    parsing::{import_text, snapshot},
};

fn import(text: &str) -> (Vec<QuestionRecord>, Vec<ReportedIssue>) {
    let mut issues: Vec<ReportedIssue> = Vec::new();
    let records = import_text(text, &ImportOptions::default(), &mut issues);
    snapshot::invariants(&records);
    (records, issues)
}

fn load_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap()
}

fn labels(records: &[QuestionRecord]) -> Vec<(String, Option<String>)> {
    snapshot::normalize(records)
        .records
        .into_iter()
        .map(|r| (format!("{}:{}", r.kind, r.label), r.id_number))
        .collect()
}

fn issue_lines(issues: &[ReportedIssue]) -> Vec<(usize, IssueClass)> {
    issues
        .iter()
        .map(|r| (r.line_number, r.issue.class()))
        .collect()
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

// Fixture-based tests

#[test]
fn fixture_mixed() {
    let (records, issues) = import(&load_fixture("mixed"));

    assert_eq!(
        labels(&records),
        vec![
            ("category:$course$/top/Unit1".to_string(), some("U1")),
            ("wordle:Capitals".to_string(), some("U1-1")),
            ("guessit_gap:Two words".to_string(), some("U1-2")),
            ("guessit_gap:Feedback".to_string(), some("U1-3")),
            ("category:$course$/top/Unit2".to_string(), some("U2")),
            ("wordle:Long".to_string(), some("U2-1")),
            ("guessit_gap:no description here".to_string(), some("U2-2")),
        ]
    );
    assert_eq!(
        issue_lines(&issues),
        vec![
            (7, IssueClass::WordleCapitalsOnly),
            (8, IssueClass::BracketsError),
            (10, IssueClass::WordleTooLong),
            (11, IssueClass::NoDescriptionProvided),
        ]
    );

    let feedback = records[3].as_question().unwrap();
    assert_eq!(feedback.max_tries, 8);
    assert_eq!(feedback.score, 3);
    assert_eq!(feedback.general_feedback, "Well done");
    assert_eq!(feedback.question_text, "<p>The cat</p>");
}

#[test]
fn fixture_crlf() {
    let (records, issues) = import(&load_fixture("crlf"));

    assert_eq!(
        labels(&records),
        vec![
            ("category:Windows".to_string(), some("W")),
            ("wordle:One".to_string(), some("W-1")),
            ("guessit_gap:Two".to_string(), some("W-2")),
        ]
    );
    assert!(issues.is_empty());
    assert_eq!(records[2].as_question().unwrap().max_tries, 14);
}

#[test]
fn fixture_embedded_breaks() {
    let (records, issues) = import(&load_fixture("embedded_breaks"));

    assert_eq!(
        labels(&records),
        vec![
            ("wordle:A".to_string(), None),
            ("wordle:B".to_string(), None),
            ("guessit_gap:C".to_string(), None),
        ]
    );
    assert!(issues.is_empty());
}

// Snapshot tests

#[test]
fn snapshot_small_import() {
    let (records, _) = import(
        "$CATEGORY: Unit1 [U1]\n::Capitals::Find the word{BANJO}\nTwo words {alpha beta}",
    );

    insta::assert_yaml_snapshot!(snapshot::normalize(&records), @r"
    records:
      - kind: category
        label: Unit1
        id_number: U1
      - kind: wordle
        label: Capitals
        id_number: U1-1
        gap_text: BANJO
        max_tries: 10
        score: 5
      - kind: guessit_gap
        label: Two words
        id_number: U1-2
        gap_text: alpha beta
        max_tries: 6
        score: 2
    ");
}

// Property tests

#[test]
fn bad_lines_never_stop_the_import() {
    let text = "no braces\n{}\n::x: {Y}\n{lower}\n{GOOD}";
    let (records, issues) = import(text);

    assert_eq!(records.len(), 1);
    assert_eq!(
        issue_lines(&issues),
        vec![
            (1, IssueClass::BraceError),
            (2, IssueClass::NoGuessitGaps),
            (3, IssueClass::NoName),
            (4, IssueClass::WordleCapitalsOnly),
            (5, IssueClass::NoDescriptionProvided),
        ]
    );
}

#[test]
fn default_tries_per_kind() {
    let (records, _) = import("W {WORD}\nM {two words}");
    let tries: Vec<u32> = records
        .iter()
        .filter_map(QuestionRecord::as_question)
        .map(|q| q.max_tries)
        .collect();
    assert_eq!(tries, vec![10, 6]);
}

#[test]
fn comments_and_noise_produce_nothing() {
    let (records, issues) = import("// only a comment\n\n x \n  // another");
    assert!(records.is_empty());
    assert!(issues.is_empty());
}

#[test]
fn leading_bom_does_not_leak_into_records() {
    let (records, issues) = import("\u{FEFF}$CATEGORY: Unit1 [U1]\n{ALPHA}");

    assert_eq!(
        labels(&records),
        vec![
            ("category:Unit1".to_string(), some("U1")),
            ("wordle:ALPHA".to_string(), some("U1-1")),
        ]
    );
    assert_eq!(issue_lines(&issues), vec![(2, IssueClass::NoDescriptionProvided)]);

    let (records, issues) = import("\u{FEFF}{ALPHA}");
    let q = records[0].as_question().unwrap();
    assert_eq!(q.name, "ALPHA");
    assert_eq!(q.question_text, "");
    assert_eq!(issue_lines(&issues), vec![(1, IssueClass::NoDescriptionProvided)]);
}

#[test]
fn empty_document() {
    let (records, issues) = import("");
    assert!(records.is_empty());
    assert!(issues.is_empty());
}
