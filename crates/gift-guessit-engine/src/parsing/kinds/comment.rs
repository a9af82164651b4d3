/// Comment lines are dropped before parsing.
pub struct Comment;

impl Comment {
    pub const MARKER: &'static str = "//";

    pub fn starts(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }
}
