use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use weekend_scout::config::Settings;
use weekend_scout::routes::{self, handle_json_payload_error, recommendations::AppState};
use weekend_scout::services::AnthropicClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Weekend Scout recommendation service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    // The upstream call cannot work without credentials, so refuse to boot
    if settings.anthropic.api_key.is_empty() {
        error!("ANTHROPIC_API_KEY is not set in environment variables");
        std::process::exit(1);
    }

    info!("Configuration loaded successfully");

    // Initialize the Anthropic client
    let anthropic_settings = settings.anthropic.clone();
    let anthropic = Arc::new(match anthropic_settings.base_url {
        Some(base_url) => AnthropicClient::with_base_url(
            base_url,
            anthropic_settings.api_key,
            anthropic_settings.model,
            anthropic_settings.max_tokens,
        ),
        None => AnthropicClient::new(
            anthropic_settings.api_key,
            anthropic_settings.model,
            anthropic_settings.max_tokens,
        ),
    });

    info!(
        "Anthropic client initialized (model: {})",
        settings.anthropic.model
    );

    if settings.app.use_mock_data {
        info!("Mock mode enabled: requests will be served from fixed data");
    }

    // Build application state
    let app_state = AppState {
        anthropic,
        use_mock_data: settings.app.use_mock_data,
        production: settings.is_production(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
