use serde::{Deserialize, Serialize};

/// One structured activity suggestion returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    pub description: String,
}

/// Subset of the Anthropic Messages API response that the parser consumes
///
/// The content array mixes block types when the web search tool runs
/// (server_tool_use, web_search_tool_result, text); only text blocks
/// carry the prose the parser cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// A single typed content block in a Messages API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ContentBlock {
    /// Build a text block, mostly useful for tests and fixtures
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            block_type: "text".to_string(),
            text: Some(text.into()),
        }
    }
}

impl MessagesResponse {
    /// Concatenate the text of all text-typed blocks, in order
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.block_type == "text")
            .filter_map(|block| block.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_text_skips_tool_blocks() {
        let response = MessagesResponse {
            content: vec![
                ContentBlock {
                    block_type: "server_tool_use".to_string(),
                    text: None,
                },
                ContentBlock::text("first"),
                ContentBlock {
                    block_type: "web_search_tool_result".to_string(),
                    text: None,
                },
                ContentBlock::text("second"),
            ],
        };

        assert_eq!(response.joined_text(), "first\nsecond");
    }

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let rec = Recommendation {
            title: "Error".to_string(),
            emoji: "⚠️".to_string(),
            location: None,
            distance: None,
            description: "Unable to parse recommendations".to_string(),
        };

        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("location").is_none());
        assert!(json.get("distance").is_none());
    }
}
