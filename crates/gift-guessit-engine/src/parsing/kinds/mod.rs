pub mod category;
pub mod comment;
pub mod question_line;
pub mod wordle;

pub use category::Category;
pub use comment::Comment;
pub use question_line::{QuestionLine, RawFields};
pub use wordle::{Wordle, word_count};
