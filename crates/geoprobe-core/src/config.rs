use crate::app_config::{ApiMode, AppConfig};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = require("GEOPROBE_BASE_URL")?;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "GEOPROBE_BASE_URL".to_string(),
            reason: "must start with http:// or https://".to_string(),
        });
    }

    let bearer_token = require("GEOPROBE_BEARER_TOKEN")?;
    if bearer_token.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "GEOPROBE_BEARER_TOKEN".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let api_mode = parse_api_mode(&or_default("GEOPROBE_API_MODE", "rest"))?;
    let request_timeout_secs = parse_u64("GEOPROBE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("GEOPROBE_USER_AGENT", "geoprobe/0.1 (address-qa)");
    let log_level = or_default("GEOPROBE_LOG_LEVEL", "info");

    Ok(AppConfig {
        base_url,
        bearer_token,
        api_mode,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

/// Parse a string into an `ApiMode` variant.
///
/// Unlike log level or user agent, an unrecognized mode is a hard error:
/// silently falling back to REST against a GraphQL-only gateway would turn
/// every report row into an error row.
fn parse_api_mode(s: &str) -> Result<ApiMode, ConfigError> {
    match s {
        "rest" => Ok(ApiMode::Rest),
        "graphql" | "gql" => Ok(ApiMode::Graphql),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GEOPROBE_API_MODE".to_string(),
            reason: format!("unknown mode \"{other}\" (expected \"rest\" or \"graphql\")"),
        }),
    }
}
