use crate::{
    issues::ImportIssue,
    models::{GuessitQuestion, QuestionRecord},
    options::ImportOptions,
};

use super::kinds::{QuestionLine, RawFields, Wordle, word_count};

/// Running values a question line needs from its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionContext {
    /// Position of the line within the current category, from 1.
    pub question_number: u32,
    pub id_number: Option<String>,
}

/// A produced record plus the non-fatal issues raised while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub record: QuestionRecord,
    pub issues: Vec<ImportIssue>,
}

impl ParseOutcome {
    pub fn clean(record: QuestionRecord) -> Self {
        Self {
            record,
            issues: vec![],
        }
    }
}

/// Turns one question line into a guessit record.
///
/// Stateless apart from the options; numbering comes in through
/// [`QuestionContext`].
pub struct QuestionLineParser<'o> {
    options: &'o ImportOptions,
}

impl<'o> QuestionLineParser<'o> {
    pub fn new(options: &'o ImportOptions) -> Self {
        Self { options }
    }

    /// Parses a trimmed question line.
    ///
    /// Pre-filters run first (braces, then brackets), then the shape check and
    /// field extraction. Rejections come back as `Err`; warnings and notices
    /// ride along in the [`ParseOutcome`].
    pub fn parse(&self, line: &str, ctx: QuestionContext) -> Result<ParseOutcome, ImportIssue> {
        let reject_line = || line.to_string();

        if !QuestionLine::has_brace_pair(line) {
            return Err(ImportIssue::BraceError { line: reject_line() });
        }
        if !QuestionLine::has_balanced_brackets(line) {
            return Err(ImportIssue::BracketsError { line: reject_line() });
        }
        let fields = QuestionLine::fields(line).ok_or_else(|| ImportIssue::NoName {
            line: reject_line(),
        })?;

        let gap_text = fields.gap_text.trim();
        if gap_text.is_empty() {
            return Err(ImportIssue::NoGuessitGaps { line: reject_line() });
        }

        let mut issues = vec![];
        let explicit_tries = self.explicit_tries(&fields, line, &mut issues);

        let description = strip_colons(fields.description);
        let name = [fields.name.unwrap_or_default(), description.as_str(), gap_text]
            .into_iter()
            .map(strip_colons)
            .find(|candidate| !candidate.is_empty())
            .ok_or_else(|| ImportIssue::NoName { line: reject_line() })?;

        let question_text = if description.is_empty() {
            String::new()
        } else {
            format!("<p>{description}</p>")
        };

        let wordle = Wordle::is_wordle(gap_text);
        let score = if wordle {
            if !Wordle::has_only_capitals(gap_text) {
                return Err(ImportIssue::WordleCapitalsOnly { line: reject_line() });
            }
            let letters = Wordle::letter_count(gap_text);
            if letters > self.options.wordle_max_length {
                issues.push(ImportIssue::WordleTooLong {
                    max_length: self.options.wordle_max_length,
                    line: reject_line(),
                });
            }
            letters
        } else {
            word_count(gap_text)
        };

        let max_tries = explicit_tries.unwrap_or(if wordle {
            self.options.wordle_default_tries
        } else {
            self.options.multi_gap_default_tries
        });

        if description.is_empty() {
            issues.push(ImportIssue::NoDescriptionProvided {
                question_number: ctx.question_number,
                question_name: name.clone(),
            });
        }

        let question = GuessitQuestion {
            id_number: ctx.id_number,
            name,
            question_text,
            gap_text: gap_text.to_string(),
            gap_size_display: (!wordle).then_some(self.options.gap_size_display),
            max_tries,
            remove_specific_feedback: self.options.remove_specific_feedback,
            general_feedback: fields
                .general_feedback
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            score,
            penalty: 0.0,
        };

        let record = if wordle {
            QuestionRecord::Wordle(question)
        } else {
            QuestionRecord::GuessitGap(question)
        };
        Ok(ParseOutcome { record, issues })
    }

    /// Reads the `[n]` modifier. Out-of-range values are kept with a warning;
    /// unreadable ones warn and fall back to the default.
    fn explicit_tries(
        &self,
        fields: &RawFields<'_>,
        line: &str,
        issues: &mut Vec<ImportIssue>,
    ) -> Option<u32> {
        let raw = fields.nb_tries.map(str::trim).filter(|t| !t.is_empty())?;
        let parsed = raw.parse::<u32>().ok();
        if !parsed.is_some_and(|n| self.options.allows_tries(n)) {
            issues.push(ImportIssue::NbTriesError {
                nb_tries: raw.to_string(),
                allowed: self.options.allowed_tries_list(),
                line: line.to_string(),
            });
        }
        parsed
    }
}

fn strip_colons(s: &str) -> String {
    s.replace(':', "").trim().to_string()
}
