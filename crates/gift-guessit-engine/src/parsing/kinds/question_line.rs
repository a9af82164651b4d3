use std::sync::OnceLock;

use regex::Regex;

/// The raw field slots of a question line, borrowed from the line.
///
/// Nothing is trimmed or defaulted here; see [`crate::parsing::parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub name: Option<&'a str>,
    pub description: &'a str,
    pub gap_text: &'a str,
    pub nb_tries: Option<&'a str>,
    pub general_feedback: Option<&'a str>,
}

/// Question lines: `[::name::] description {gap text [n] ####feedback}`.
pub struct QuestionLine;

impl QuestionLine {
    pub const NAME_DELIMITER: &'static str = "::";
    pub const FEEDBACK_MARKER: &'static str = "####";

    /// True if the line has at least one `{...}` pair, empty or not.
    pub fn has_brace_pair(line: &str) -> bool {
        brace_pair().is_match(line)
    }

    /// True if every `]` closes an earlier `[` and none is left open.
    pub fn has_balanced_brackets(line: &str) -> bool {
        let mut depth = 0usize;
        for c in line.chars() {
            match c {
                '[' => depth += 1,
                ']' => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
                _ => {}
            }
        }
        depth == 0
    }

    /// Extracts the field slots in one pass.
    ///
    /// Returns `None` when the line does not have the overall question shape,
    /// including a leading `::` that is never closed.
    pub fn fields(line: &str) -> Option<RawFields<'_>> {
        let caps = question_shape().captures(line)?;
        let name = caps.name("name").map(|m| m.as_str());
        let description = caps.name("description").map_or("", |m| m.as_str());
        if name.is_none() && description.trim_start().starts_with(Self::NAME_DELIMITER) {
            return None;
        }

        Some(RawFields {
            name,
            description,
            gap_text: caps.name("gaps").map_or("", |m| m.as_str()),
            nb_tries: caps.name("nbtries").map(|m| m.as_str()),
            general_feedback: caps.name("feedback").map(|m| m.as_str()),
        })
    }
}

fn brace_pair() -> &'static Regex {
    static BRACE_PAIR: OnceLock<Regex> = OnceLock::new();
    BRACE_PAIR.get_or_init(|| Regex::new(r"\{[^{}]*\}").expect("Invalid brace pair regex"))
}

fn question_shape() -> &'static Regex {
    static QUESTION_SHAPE: OnceLock<Regex> = OnceLock::new();
    QUESTION_SHAPE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:::(?P<name>[^{}]*?)::)?",
            r"(?P<description>[^{}]*)",
            r"\{(?P<gaps>[^{}]*?)",
            r"(?:\s*\[(?P<nbtries>[^\[\]{}]*)\])?",
            r"\s*(?:####(?P<feedback>[^{}]*))?",
            r"\}\s*$",
        ))
        .expect("Invalid question shape regex")
    })
}
