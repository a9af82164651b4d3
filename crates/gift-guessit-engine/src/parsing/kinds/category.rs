use crate::models::CategoryRecord;

/// Category-change lines: `$CATEGORY: path [tag]`.
///
/// All category syntax knowledge lives here. Category lines are not validated:
/// whatever follows the marker is taken as the path.
pub struct Category;

impl Category {
    pub const MARKER: &'static str = "$CATEGORY:";
    pub const TAG_OPEN: char = '[';
    pub const TAG_CLOSE: char = ']';

    pub fn starts(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Splits a category line into its path and optional trailing tag.
    ///
    /// An empty tag (`[]`) counts as no tag.
    pub fn parse(line: &str) -> CategoryRecord {
        let raw = line.strip_prefix(Self::MARKER).unwrap_or(line).trim();

        if let Some(body) = raw.strip_suffix(Self::TAG_CLOSE)
            && let Some(open) = body.rfind(Self::TAG_OPEN)
        {
            let tag = body[open + 1..].trim();
            if !tag.contains(Self::TAG_CLOSE) {
                return CategoryRecord {
                    category: body[..open].trim().to_string(),
                    id_number: (!tag.is_empty()).then(|| tag.to_string()),
                };
            }
        }

        CategoryRecord {
            category: raw.to_string(),
            id_number: None,
        }
    }
}
