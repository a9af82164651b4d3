/// Control characters that break one physical line into several logical lines.
///
/// A lone carriage return comes from classic Mac line endings; the vertical tab
/// is what word processors emit for a manual line break.
pub const EMBEDDED_BREAKS: [char; 2] = ['\r', '\u{0B}'];

/// Byte order mark some editors put at the start of a text file.
pub const BOM: char = '\u{FEFF}';

/// A logical line of the imported text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based number of the physical line this logical line belongs to.
    pub number: usize,
    /// The untrimmed text, without any line break characters.
    pub text: &'a str,
}

/// Returns an iterator over the logical lines of `raw`.
///
/// Physical lines are split on `\n`; each is then split again on
/// [`EMBEDDED_BREAKS`], so `\r\n` endings leave an empty trailing piece that
/// later stages drop as blank. A leading [`BOM`] is dropped.
pub fn logical_lines(raw: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let raw = raw.strip_prefix(BOM).unwrap_or(raw);
    raw.split('\n').enumerate().flat_map(|(idx, physical)| {
        physical
            .split(EMBEDDED_BREAKS)
            .map(move |text| LineRef {
                number: idx + 1,
                text,
            })
    })
}
