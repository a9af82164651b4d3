pub mod question;

pub use question::{CategoryRecord, GapSizeDisplay, GuessitQuestion, QuestionKind, QuestionRecord};
