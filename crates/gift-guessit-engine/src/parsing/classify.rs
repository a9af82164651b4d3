use super::{
    kinds::{Category, Comment},
    lines::LineRef,
};

/// What a logical line is, judged from the line alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Shorter than [`GiftLineClassifier::MIN_LINE_LEN`] once trimmed.
    Blank,
    Comment,
    Category,
    Question,
}

/// Classification of a single logical line containing only local facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// 1-based physical line number.
    pub number: usize,
    pub kind: LineKind,
    /// Trimmed line text.
    pub text: &'a str,
}

/// Classifies individual logical lines for the splitter.
pub struct GiftLineClassifier;

impl GiftLineClassifier {
    /// Trimmed lines shorter than this are noise.
    pub const MIN_LINE_LEN: usize = 2;

    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.text.trim();

        let kind = if text.chars().count() < Self::MIN_LINE_LEN {
            LineKind::Blank
        } else if Comment::starts(text) {
            LineKind::Comment
        } else if Category::starts(text) {
            LineKind::Category
        } else {
            LineKind::Question
        };
        log::trace!("line {}: {:?}", lr.number, kind);

        LineClass {
            number: lr.number,
            kind,
            text,
        }
    }
}
