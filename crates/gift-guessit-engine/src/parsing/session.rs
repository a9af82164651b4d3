use crate::{issues::ImportIssue, models::QuestionRecord, options::ImportOptions};

use super::{
    kinds::Category,
    parser::{ParseOutcome, QuestionContext, QuestionLineParser},
    split::{RecordLine, RecordLineKind},
};

/// Running state of one import, threaded through every line in order.
///
/// `question_number` counts question lines (accepted or not) since the last
/// category line. `category_name` is the tag of that category line and prefixes
/// the id number of each following question.
pub struct ParseSession<'o> {
    parser: QuestionLineParser<'o>,
    question_number: u32,
    category_name: Option<String>,
}

impl<'o> ParseSession<'o> {
    pub fn new(options: &'o ImportOptions) -> Self {
        Self {
            parser: QuestionLineParser::new(options),
            question_number: 0,
            category_name: None,
        }
    }

    pub fn parse(&mut self, line: &RecordLine<'_>) -> Result<ParseOutcome, ImportIssue> {
        match line.kind {
            RecordLineKind::Category => {
                let category = Category::parse(line.text);
                self.category_name = category.id_number.clone();
                self.question_number = 0;
                Ok(ParseOutcome::clean(QuestionRecord::Category(category)))
            }
            RecordLineKind::Question => {
                self.question_number += 1;
                let ctx = QuestionContext {
                    question_number: self.question_number,
                    id_number: self
                        .category_name
                        .as_ref()
                        .map(|name| format!("{name}-{}", self.question_number)),
                };
                self.parser.parse(line.text, ctx)
            }
        }
    }
}
