use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{build_prompt, parse_recommendations};
use crate::models::{
    first_violation, ErrorResponse, HealthResponse, RecommendationRequest, RecommendationsResponse,
};
use crate::services::{fetch_mock_recommendations, AnthropicClient, AnthropicError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub anthropic: Arc<AnthropicClient>,
    pub use_mock_data: bool,
    pub production: bool,
}

/// Configure all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/recommendations", web::post().to(get_recommendations));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Recommendations endpoint
///
/// POST /api/recommendations
///
/// Request body:
/// ```json
/// {
///   "city": "Austin",
///   "minAge": 5,
///   "maxAge": 10,
///   "availability": "Saturday afternoon",
///   "maxDistance": 10,
///   "preferences": "museums"
/// }
/// ```
async fn get_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    // Validate request before anything leaves the process
    if let Err(errors) = req.validate() {
        let details = first_violation(&errors);
        tracing::info!("Validation failed for recommendation request: {}", details);
        return HttpResponse::BadRequest()
            .json(ErrorResponse::with_details("Validation failed", details));
    }

    tracing::info!(
        "Received recommendation request: city={}, ages={}-{}, availability={}, maxDistance={}",
        req.city,
        req.min_age,
        req.max_age,
        req.availability,
        req.max_distance
    );

    if state.use_mock_data {
        tracing::info!("Using mock data (set USE_MOCK_DATA=false to call the Claude API)");

        let recommendations = fetch_mock_recommendations(&req.city, req.min_age, req.max_age).await;

        tracing::info!("Returning {} mock recommendations", recommendations.len());
        return HttpResponse::Ok().json(RecommendationsResponse { recommendations });
    }

    let prompt = build_prompt(&req);

    tracing::info!("Calling Claude API with web search...");

    let response = match state.anthropic.create_message(&prompt).await {
        Ok(response) => response,
        Err(e) => return upstream_error_response(e, state.production),
    };

    // Parse failures degrade to a synthetic error record inside a 200
    let recommendations = parse_recommendations(&response);

    tracing::info!("Parsed {} recommendations", recommendations.len());

    HttpResponse::Ok().json(RecommendationsResponse { recommendations })
}

/// Map upstream failures to the HTTP statuses the client understands
fn upstream_error_response(error: AnthropicError, production: bool) -> HttpResponse {
    match error {
        AnthropicError::RateLimited => {
            tracing::warn!("Claude API rate limit hit");
            HttpResponse::TooManyRequests().json(ErrorResponse::new(
                "Rate limit exceeded. Please try again later.",
            ))
        }
        AnthropicError::Unauthorized => HttpResponse::Unauthorized().json(
            ErrorResponse::with_details(
                "Authentication failed",
                "Invalid API key. Please check your ANTHROPIC_API_KEY.",
            ),
        ),
        AnthropicError::BadRequest(detail) => {
            HttpResponse::BadRequest().json(ErrorResponse::with_details("Bad request", detail))
        }
        AnthropicError::Unavailable => HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
            "Claude API unavailable. Please try again later.",
        )),
        other => {
            tracing::error!("Error in recommendations endpoint: {}", other);
            let mut body = ErrorResponse::new("Internal server error");
            if !production {
                body.message = Some(other.to_string());
            }
            HttpResponse::InternalServerError().json(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_rate_limit_passthrough() {
        let response = upstream_error_response(AnthropicError::RateLimited, true);
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_auth_failure_maps_to_401() {
        let response = upstream_error_response(AnthropicError::Unauthorized, true);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_upstream_bad_request_maps_to_400() {
        let response =
            upstream_error_response(AnthropicError::BadRequest("bad prompt".to_string()), true);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        let response = upstream_error_response(AnthropicError::Unavailable, true);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_unexpected_errors_map_to_500() {
        let response = upstream_error_response(
            AnthropicError::InvalidResponse("truncated body".to_string()),
            true,
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
