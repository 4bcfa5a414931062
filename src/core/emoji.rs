/// Unicode ranges scanned for a title's pictographic glyph
///
/// Covers the symbols-and-pictographs planes plus the legacy
/// miscellaneous-symbols and dingbats blocks, which is where the
/// activity emoji the prompt asks for actually land.
const PICTOGRAPH_RANGES: [(u32, u32); 3] = [
    (0x1F300, 0x1F9FF),
    (0x2600, 0x26FF),
    (0x2700, 0x27BF),
];

/// Glyph substituted when a title carries no recognizable emoji
pub const DEFAULT_EMOJI: &str = "🎯";

/// Glyph used by the synthetic parse-failure record
pub const WARNING_EMOJI: &str = "⚠️";

/// Check whether a character falls in one of the scanned pictograph ranges
#[inline]
pub fn is_pictograph(c: char) -> bool {
    let code = c as u32;
    PICTOGRAPH_RANGES
        .iter()
        .any(|&(low, high)| code >= low && code <= high)
}

/// Find the first pictograph in a string, if any
pub fn find_pictograph(text: &str) -> Option<char> {
    text.chars().find(|&c| is_pictograph(c))
}

/// Remove every pictograph from a string and trim the result
pub fn strip_pictographs(text: &str) -> String {
    text.chars()
        .filter(|&c| !is_pictograph(c))
        .collect::<String>()
        .trim()
        .to_string()
}
