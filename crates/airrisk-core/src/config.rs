use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// File name of the generated warnings document.
pub const OUTPUT_FILE_NAME: &str = "safeairspace-warnings.kml";

const DEFAULT_FEED_URL: &str = "https://safeairspace.net/";
const DEFAULT_DETAIL_BASE_URL: &str = "https://safeairspace.net";
const DEFAULT_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/datasets/geo-countries/master/data/countries.geojson";
const DEFAULT_REPOSITORY: &str = "example/map-pipeline";
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
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
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("AIRRISK_ENV", "development"))?;
    let log_level = or_default("AIRRISK_LOG_LEVEL", "info");

    let feed_url = or_default("AIRRISK_FEED_URL", DEFAULT_FEED_URL);
    let detail_base_url = or_default("AIRRISK_DETAIL_BASE_URL", DEFAULT_DETAIL_BASE_URL)
        .trim_end_matches('/')
        .to_string();
    let boundaries_url = or_default("AIRRISK_BOUNDARIES_URL", DEFAULT_BOUNDARIES_URL);

    let output_dir = PathBuf::from(or_default("AIRRISK_OUTPUT_DIR", "./kmls"));
    let manifest_path = PathBuf::from(or_default("AIRRISK_MANIFEST_PATH", "./kml-manifest.json"));
    let manifest_base_url = lookup("AIRRISK_MANIFEST_BASE_URL").unwrap_or_else(|_| {
        let repository = or_default("GITHUB_REPOSITORY", DEFAULT_REPOSITORY);
        format!("https://raw.githubusercontent.com/{repository}/main/kmls")
    });

    let request_timeout_secs = parse_u64("AIRRISK_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("AIRRISK_USER_AGENT", DEFAULT_USER_AGENT);

    let notice_batch_size = parse_usize("AIRRISK_NOTICE_BATCH_SIZE", "5")?;
    if notice_batch_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "AIRRISK_NOTICE_BATCH_SIZE".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        feed_url,
        detail_base_url,
        boundaries_url,
        output_dir,
        manifest_path,
        manifest_base_url,
        request_timeout_secs,
        user_agent,
        notice_batch_size,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "AIRRISK_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
