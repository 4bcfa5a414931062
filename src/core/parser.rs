use crate::core::emoji::{find_pictograph, strip_pictographs, DEFAULT_EMOJI, WARNING_EMOJI};
use crate::models::{MessagesResponse, Recommendation};

/// Maximum number of records returned per request
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Extract structured recommendations from the model's free-text reply
///
/// Total function: malformed input degrades to a single synthetic record
/// titled "Error" so the caller always has a renderable list. The ordering
/// of the source text is preserved and never re-derived; surplus records
/// are truncated after the fifth.
pub fn parse_recommendations(response: &MessagesResponse) -> Vec<Recommendation> {
    let text = response.joined_text();
    if text.is_empty() {
        return vec![fallback_record("No text content in Claude response")];
    }

    // The prompt bolds every title, so splitting on the ** delimiter yields
    // alternating (title, body) chunks for well-formed replies.
    let sections: Vec<&str> = text.split("**").filter(|s| !s.trim().is_empty()).collect();

    let mut recommendations = Vec::new();
    let mut index = 0;
    while index + 1 < sections.len() {
        let title_line = sections[index].trim();
        let content = sections[index + 1].trim();
        index += 2;

        if title_line.is_empty() || content.is_empty() {
            continue;
        }

        let emoji = find_pictograph(title_line)
            .map(|glyph| glyph.to_string())
            .unwrap_or_else(|| DEFAULT_EMOJI.to_string());
        let title = strip_pictographs(title_line);

        let (location, content) = extract_labeled_line(content, "location:", '📍');
        let (distance, content) = extract_labeled_line(&content, "distance:", '🚗');

        let description = content
            .split("\n\n")
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();

        if !title.is_empty() && !description.is_empty() {
            recommendations.push(Recommendation {
                title,
                emoji,
                location,
                distance,
                description,
            });
        }
    }

    if recommendations.is_empty() {
        return vec![fallback_record("No recommendations found in response")];
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

fn fallback_record(reason: &str) -> Recommendation {
    Recommendation {
        title: "Error".to_string(),
        emoji: WARNING_EMOJI.to_string(),
        location: None,
        distance: None,
        description: format!("Unable to parse recommendations: {}", reason),
    }
}

/// Extract the value trailing the first matching "label:" occurrence and
/// return the text with every labeled line removed
///
/// The label match is case-insensitive and may be preceded by its glyph
/// marker (📍 or 🚗), which is removed along with the line. Repeated
/// labels are all stripped but only the first populates the value.
fn extract_labeled_line(text: &str, label: &str, marker: char) -> (Option<String>, String) {
    let mut value: Option<String> = None;
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(found) = find_ascii_ci(&text[pos..], label) {
        let label_start = pos + found;
        let value_start = label_start + label.len();
        let line_end = text[value_start..]
            .find('\n')
            .map(|offset| value_start + offset)
            .unwrap_or(text.len());

        let raw_value = &text[value_start..line_end];
        if raw_value.is_empty() {
            // Bare label with nothing after the colon: not a labeled line
            out.push_str(&text[pos..line_end]);
            pos = line_end;
            continue;
        }

        if value.is_none() && !raw_value.trim().is_empty() {
            value = Some(raw_value.trim().to_string());
        }

        let cut_start = removal_start(text, label_start, marker).max(pos);
        out.push_str(&text[pos..cut_start]);
        pos = if line_end < text.len() { line_end + 1 } else { line_end };
    }

    out.push_str(&text[pos..]);
    (value, out)
}

/// Widen a removal to cover the glyph marker when it directly precedes the
/// label, separated only by whitespace
fn removal_start(text: &str, label_start: usize, marker: char) -> usize {
    let prefix = text[..label_start].trim_end_matches(|c: char| c.is_whitespace());
    if prefix.ends_with(marker) {
        prefix.len() - marker.len_utf8()
    } else {
        label_start
    }
}

/// Case-insensitive search for an ASCII needle, returning a byte offset
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}
