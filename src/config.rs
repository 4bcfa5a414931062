use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub anthropic: AnthropicSettings,
    #[serde(default)]
    pub app: AppSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub use_mock_data: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

impl Default for AnthropicSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            base_url: None,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            use_mock_data: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3001
}
fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}
fn default_max_tokens() -> u32 {
    4096
}
fn default_environment() -> String {
    "development".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with SCOUT_)
    /// 4. Conventional direct variables (ANTHROPIC_API_KEY, USE_MOCK_DATA,
    ///    PORT, APP_ENV)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g. SCOUT_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SCOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Whether error detail should be withheld from 500 responses
    pub fn is_production(&self) -> bool {
        self.app.environment.eq_ignore_ascii_case("production")
    }
}

/// Apply the conventional environment variable names on top of whatever the
/// config sources provided
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = env::var("ANTHROPIC_API_KEY") {
        builder = builder.set_override("anthropic.api_key", api_key)?;
    }
    if let Ok(use_mock) = env::var("USE_MOCK_DATA") {
        builder = builder.set_override("app.use_mock_data", use_mock == "true")?;
    }
    if let Ok(port) = env::var("PORT") {
        if let Ok(port) = port.parse::<i64>() {
            builder = builder.set_override("server.port", port)?;
        }
    }
    if let Ok(environment) = env::var("APP_ENV") {
        builder = builder.set_override("app.environment", environment)?;
    }

    builder.build()
}
