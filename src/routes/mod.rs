// Route exports
pub mod recommendations;

use actix_web::{error, http::StatusCode, web, HttpResponse};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(recommendations::configure);
}

/// JSON error response for malformed request payloads
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub details: String,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.details)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::BAD_REQUEST)
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors (wrong-typed fields, truncated bodies)
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "Invalid JSON".to_string(),
        details: format!("{}", err),
    }
    .into()
}
