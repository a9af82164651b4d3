use serde::Serialize;

use crate::models::QuestionRecord;

/// Snapshot of an import for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub records: Vec<RecordSnap>,
}

/// The fields of a record worth asserting on, with unset ones omitted.
#[derive(Debug, Serialize)]
pub struct RecordSnap {
    /// `category`, `guessit_gap` or `wordle`.
    pub kind: String,
    /// Category path or question name.
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<usize>,
}

pub fn normalize(records: &[QuestionRecord]) -> Snap {
    let records = records
        .iter()
        .map(|record| {
            let kind = match record {
                QuestionRecord::Category(_) => "category",
                QuestionRecord::GuessitGap(_) => "guessit_gap",
                QuestionRecord::Wordle(_) => "wordle",
            }
            .to_string();

            match record {
                QuestionRecord::Category(c) => RecordSnap {
                    kind,
                    label: c.category.clone(),
                    id_number: c.id_number.clone(),
                    gap_text: None,
                    max_tries: None,
                    score: None,
                },
                QuestionRecord::GuessitGap(q) | QuestionRecord::Wordle(q) => RecordSnap {
                    kind,
                    label: q.name.clone(),
                    id_number: q.id_number.clone(),
                    gap_text: Some(q.gap_text.clone()),
                    max_tries: Some(q.max_tries),
                    score: Some(q.score),
                },
            }
        })
        .collect();

    Snap { records }
}
