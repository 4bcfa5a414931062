// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ContentBlock, MessagesResponse, Recommendation};
pub use requests::{first_violation, RecommendationRequest};
pub use responses::{ErrorResponse, HealthResponse, RecommendationsResponse};
