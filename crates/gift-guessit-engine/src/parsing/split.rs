use super::{
    classify::{GiftLineClassifier, LineClass, LineKind},
    lines::logical_lines,
};

/// What a surviving line will become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLineKind {
    Category,
    Question,
}

/// A line that will produce a record or an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLine<'a> {
    /// 1-based physical line number.
    pub number: usize,
    pub kind: RecordLineKind,
    /// Trimmed line text.
    pub text: &'a str,
}

impl<'a> RecordLine<'a> {
    /// Keeps category and question lines, drops blank and comment lines.
    pub fn from_class(lc: LineClass<'a>) -> Option<Self> {
        let kind = match lc.kind {
            LineKind::Category => RecordLineKind::Category,
            LineKind::Question => RecordLineKind::Question,
            LineKind::Blank => return None,
            LineKind::Comment => {
                log::debug!("line {}: skipping comment", lc.number);
                return None;
            }
        };
        Some(Self {
            number: lc.number,
            kind,
            text: lc.text,
        })
    }
}

/// Splits the imported text into category and question lines, in input order.
///
/// The iterator is lazy and borrows `raw`; call again to restart.
pub fn split(raw: &str) -> impl Iterator<Item = RecordLine<'_>> + '_ {
    let classifier = GiftLineClassifier;
    logical_lines(raw)
        .map(move |lr| classifier.classify(&lr))
        .filter_map(RecordLine::from_class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(raw: &str) -> Vec<(usize, RecordLineKind, &str)> {
        split(raw).map(|l| (l.number, l.kind, l.text)).collect()
    }

    #[test]
    fn keeps_order_and_drops_noise() {
        let raw = "// header comment\n\
                   $CATEGORY: Unit1 [U1]\n\
                   \n\
                   x\n\
                   ::A:: first {ONE}\n\
                   \t{two words}  \n";
        assert_eq!(
            summary(raw),
            vec![
                (2, RecordLineKind::Category, "$CATEGORY: Unit1 [U1]"),
                (5, RecordLineKind::Question, "::A:: first {ONE}"),
                (6, RecordLineKind::Question, "{two words}"),
            ]
        );
    }

    #[test]
    fn embedded_breaks_produce_separate_records() {
        let raw = "{ALPHA}\r{BETA}\u{0B}// hidden\r\n{GAMMA}";
        assert_eq!(
            summary(raw),
            vec![
                (1, RecordLineKind::Question, "{ALPHA}"),
                (1, RecordLineKind::Question, "{BETA}"),
                (2, RecordLineKind::Question, "{GAMMA}"),
            ]
        );
    }

    #[test]
    fn comment_after_embedded_break_is_detected_on_its_own_line() {
        let raw = "$CATEGORY: A\r// $CATEGORY: B";
        assert_eq!(
            summary(raw),
            vec![(1, RecordLineKind::Category, "$CATEGORY: A")]
        );
    }

    #[test]
    fn restartable() {
        let raw = "{ONE}\n{TWO}";
        assert_eq!(split(raw).count(), 2);
        assert_eq!(split(raw).count(), 2);
    }

    #[test]
    fn empty_input() {
        assert_eq!(split("").count(), 0);
        assert_eq!(split("\n\n  \n").count(), 0);
    }
}
