/// Wordle payloads: a single word of capital letters.
///
/// Classification is structural. A gap text without internal whitespace is a
/// Wordle, anything else is a multi-gap question.
pub struct Wordle;

impl Wordle {
    /// `gap_text` must already be trimmed.
    pub fn is_wordle(gap_text: &str) -> bool {
        !gap_text.chars().any(char::is_whitespace)
    }

    pub fn has_only_capitals(gap_text: &str) -> bool {
        !gap_text.is_empty() && gap_text.chars().all(|c| c.is_ascii_uppercase())
    }

    pub fn letter_count(gap_text: &str) -> usize {
        gap_text.chars().count()
    }
}

/// Number of answer words in a multi-gap payload.
pub fn word_count(gap_text: &str) -> usize {
    gap_text.split_whitespace().count()
}
