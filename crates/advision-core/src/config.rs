use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Used by tests
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Nothing is strictly required: a missing `GEMINI_APIKEY` or
/// `OPENAI_API_KEY` is a supported degraded mode, not a startup failure.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_raw = or_default("ADVISION_BIND_ADDR", "0.0.0.0:5000");
    let bind_addr = bind_raw
        .parse::<SocketAddr>()
        .map_err(|e| invalid("ADVISION_BIND_ADDR", e.to_string()))?;

    let env = parse_environment(&or_default("ADVISION_ENV", "development"))?;
    let log_level = or_default("ADVISION_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default("ADVISION_CATALOG_PATH", "./config/ads.yaml"));

    let secret = |var: &str| {
        lookup(var)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    };

    let gemini_api_key = secret("GEMINI_APIKEY");
    let gemini_base_url = or_default(
        "ADVISION_GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com/",
    );
    let gemini_model = or_default("ADVISION_GEMINI_MODEL", "gemini-1.5-flash");

    let generation_timeout_secs = or_default("ADVISION_GENERATION_TIMEOUT_SECS", "60")
        .parse::<u64>()
        .map_err(|e| invalid("ADVISION_GENERATION_TIMEOUT_SECS", e.to_string()))?;

    let image_api_key = secret("OPENAI_API_KEY");
    let image_base_url = or_default("ADVISION_IMAGE_BASE_URL", "https://api.openai.com/");
    let image_model = or_default("ADVISION_IMAGE_MODEL", "dall-e-3");

    let heuristic_seed = match lookup("ADVISION_HEURISTIC_SEED") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("ADVISION_HEURISTIC_SEED", e.to_string()))?,
        ),
        Err(_) => None,
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        gemini_api_key,
        gemini_base_url,
        gemini_model,
        generation_timeout_secs,
        image_api_key,
        image_base_url,
        image_model,
        heuristic_seed,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ADVISION_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
