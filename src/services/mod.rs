// Service exports
pub mod anthropic;
pub mod mock;

pub use anthropic::{AnthropicClient, AnthropicError};
pub use mock::fetch_mock_recommendations;
