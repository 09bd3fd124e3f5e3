use std::path::PathBuf;

use crate::app_config::{AppConfig, FollowersPolicy};
use crate::ConfigError;

/// Desktop Chrome user agent sent with every page fetch.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// OpenAI-compatible endpoint of a local Ollama server.
pub const DEFAULT_LLM_BASE_URL: &str = "http://localhost:11434/v1";

pub const DEFAULT_LLM_MODEL: &str = "llama3.2:3b";

pub const DEFAULT_LLM_TEMPERATURE: f32 = 0.0;

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
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can use a
/// plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional_path = |var: &str| -> Option<PathBuf> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    };

    let log_level = or_default("BOOKREV_LOG_LEVEL", "info");
    let user_agent = or_default("BOOKREV_USER_AGENT", DEFAULT_USER_AGENT);
    let llm_base_url = or_default("BOOKREV_LLM_BASE_URL", DEFAULT_LLM_BASE_URL);
    let llm_api_key = lookup("BOOKREV_LLM_API_KEY")
        .ok()
        .filter(|v| !v.is_empty());
    let llm_model = or_default("BOOKREV_LLM_MODEL", DEFAULT_LLM_MODEL);

    let llm_temperature = match lookup("BOOKREV_LLM_TEMPERATURE") {
        Ok(raw) => parse_temperature(&raw).map_err(|reason| ConfigError::InvalidEnvVar {
            var: "BOOKREV_LLM_TEMPERATURE".to_string(),
            reason,
        })?,
        Err(_) => DEFAULT_LLM_TEMPERATURE,
    };

    let followers_policy =
        parse_followers_policy(&or_default("BOOKREV_FOLLOWERS_POLICY", "strict"))?;

    Ok(AppConfig {
        log_level,
        user_agent,
        llm_base_url,
        llm_api_key,
        llm_model,
        llm_temperature,
        selectors_path: optional_path("BOOKREV_SELECTORS_PATH"),
        prompt_path: optional_path("BOOKREV_PROMPT_PATH"),
        followers_policy,
    })
}

/// Parse a sampling temperature, accepting values in `0.0..=2.0`.
///
/// # Errors
///
/// Returns a human-readable reason when the value is not a number or is out
/// of range.
pub fn parse_temperature(raw: &str) -> Result<f32, String> {
    let value = raw.trim().parse::<f32>().map_err(|e| e.to_string())?;
    if !(0.0..=2.0).contains(&value) {
        return Err(format!("temperature {value} is outside 0.0..=2.0"));
    }
    Ok(value)
}

/// Parse a string into a [`FollowersPolicy`] variant.
fn parse_followers_policy(s: &str) -> Result<FollowersPolicy, ConfigError> {
    match s {
        "strict" => Ok(FollowersPolicy::Strict),
        "lenient" => Ok(FollowersPolicy::Lenient),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BOOKREV_FOLLOWERS_POLICY".to_string(),
            reason: format!("unknown policy \"{other}\"; expected strict or lenient"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
