use crate::models::QuestionRecord;

/// Validates importer output invariants.
///
/// Asserts that:
/// - Every question name is non-empty and free of `:`
/// - Gap text is non-empty
/// - Wordle payloads are capitals only and scored by letter
/// - Multi-gap payloads are scored by word
/// - Penalty is zero
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(records: &[QuestionRecord]) {
    for record in records {
        let Some(q) = record.as_question() else {
            continue;
        };
        assert!(!q.name.is_empty(), "empty name: {q:?}");
        assert!(!q.name.contains(':'), "colon in name: {:?}", q.name);
        assert!(!q.gap_text.is_empty(), "empty gap text: {q:?}");
        assert_eq!(q.penalty, 0.0, "non-zero penalty: {q:?}");

        match record {
            QuestionRecord::Wordle(_) => {
                assert!(
                    q.gap_text.chars().all(|c| c.is_ascii_uppercase()),
                    "wordle payload not capitals only: {:?}",
                    q.gap_text
                );
                assert_eq!(q.score, q.gap_text.chars().count(), "wordle score: {q:?}");
                assert!(q.gap_size_display.is_none(), "wordle with gap display: {q:?}");
            }
            QuestionRecord::GuessitGap(_) => {
                assert!(
                    q.gap_text.chars().any(char::is_whitespace),
                    "multi-gap payload without whitespace: {:?}",
                    q.gap_text
                );
                assert_eq!(
                    q.score,
                    q.gap_text.split_whitespace().count(),
                    "multi-gap score: {q:?}"
                );
            }
            QuestionRecord::Category(_) => {}
        }
    }
}
