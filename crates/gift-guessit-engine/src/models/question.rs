use serde::{Deserialize, Serialize};

/// Variant tag of a [`QuestionRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Category,
    GuessitGap,
    Wordle,
}

/// How the gaps of a multi-gap question are sized when displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapSizeDisplay {
    /// Gaps grow as the student types.
    #[default]
    #[serde(rename = "gapsizegrow")]
    Grow,
    /// Each gap is as wide as its expected word.
    #[serde(rename = "gapsizematchword")]
    MatchWord,
    /// All gaps share the width of the longest word.
    #[serde(rename = "gapsizefixed")]
    Fixed,
}

/// One record produced by the import, ready for the host to persist.
///
/// A record is either a category change or a guessit question; the question
/// variants share [`GuessitQuestion`] and differ only in their tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionRecord {
    Category(CategoryRecord),
    GuessitGap(GuessitQuestion),
    Wordle(GuessitQuestion),
}

impl QuestionRecord {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Category(_) => QuestionKind::Category,
            Self::GuessitGap(_) => QuestionKind::GuessitGap,
            Self::Wordle(_) => QuestionKind::Wordle,
        }
    }

    pub fn as_category(&self) -> Option<&CategoryRecord> {
        match self {
            Self::Category(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_question(&self) -> Option<&GuessitQuestion> {
        match self {
            Self::Category(_) => None,
            Self::GuessitGap(q) | Self::Wordle(q) => Some(q),
        }
    }
}

/// Pseudo-question switching the category of the records that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Category path, e.g. `$course$/top/Unit1`.
    pub category: String,
    /// Contents of a trailing `[...]` tag, used to number later questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
}

/// Fields shared by the multi-gap and Wordle question variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessitQuestion {
    /// `<category tag>-<question number>` when a tagged category is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    /// Display name. Never empty and never contains `:`.
    pub name: String,
    /// Description wrapped in `<p>...</p>`, or empty.
    pub question_text: String,
    /// The word(s) to be guessed.
    pub gap_text: String,
    /// Absent for Wordle questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_size_display: Option<GapSizeDisplay>,
    /// Tries before help is offered (multi-gap) or before failure (Wordle).
    pub max_tries: u32,
    pub remove_specific_feedback: bool,
    pub general_feedback: String,
    /// Letters for Wordle, words otherwise.
    pub score: usize,
    /// Always zero: guessit questions are never penalised per try.
    pub penalty: f64,
}
