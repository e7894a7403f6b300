//! Configuration loader
//!
//! Builds the application configuration in three layers.
//!
//! ## Loading Strategy
//! 1. Start from [`Config::default`] (GitHub endpoints, `0.0.0.0:8080`)
//! 2. If `AUTHFLOW_CONFIG` names a file, load it instead (JSON or TOML,
//!    detected by extension; missing keys keep their defaults)
//! 3. Apply environment variable overrides on top
//!
//! ## Environment Variables
//! - `APPLICATION_CLIENT_ID`: OAuth client id
//! - `APPLICATION_CLIENT_SECRET`: OAuth client secret
//! - `AUTHFLOW_BIND_ADDRESS`: Listen address
//! - `AUTHFLOW_PUBLIC_URL`: Base URL the browser uses to reach the server
//! - `AUTHFLOW_STATIC_DIR`: Directory served for `/`
//! - `AUTHFLOW_OPEN_BROWSER`: Open the browser at start (true/false)
//! - `AUTHFLOW_AUTHORIZE_URL`: Provider authorization endpoint
//! - `AUTHFLOW_TOKEN_URL`: Provider token endpoint
//! - `AUTHFLOW_API_BASE_URL`: Provider REST API base URL
//! - `AUTHFLOW_SCOPES`: Comma-separated scopes
//! - `AUTHFLOW_DUMP_REQUESTS`: Log outbound requests (true/false)
//! - `AUTHFLOW_HTTP_TIMEOUT_SECS`: Outbound request timeout in seconds
//!
//! Missing client credentials do not fail loading; the provider rejects
//! the flow later and a warning is logged here.

use std::path::Path;

use authflow_domain::{AuthFlowError, Config, Result};
use url::Url;

/// Names the optional configuration file.
pub const CONFIG_PATH_ENV: &str = "AUTHFLOW_CONFIG";

const CLIENT_ID_ENV: &str = "APPLICATION_CLIENT_ID";
const CLIENT_SECRET_ENV: &str = "APPLICATION_CLIENT_SECRET";
const BIND_ADDRESS_ENV: &str = "AUTHFLOW_BIND_ADDRESS";
const PUBLIC_URL_ENV: &str = "AUTHFLOW_PUBLIC_URL";
const STATIC_DIR_ENV: &str = "AUTHFLOW_STATIC_DIR";
const OPEN_BROWSER_ENV: &str = "AUTHFLOW_OPEN_BROWSER";
const AUTHORIZE_URL_ENV: &str = "AUTHFLOW_AUTHORIZE_URL";
const TOKEN_URL_ENV: &str = "AUTHFLOW_TOKEN_URL";
const API_BASE_URL_ENV: &str = "AUTHFLOW_API_BASE_URL";
const SCOPES_ENV: &str = "AUTHFLOW_SCOPES";
const DUMP_REQUESTS_ENV: &str = "AUTHFLOW_DUMP_REQUESTS";
const HTTP_TIMEOUT_ENV: &str = "AUTHFLOW_HTTP_TIMEOUT_SECS";

/// Load configuration from the process environment
///
/// # Errors
/// Returns `AuthFlowError::Config` if:
/// - `AUTHFLOW_CONFIG` names a missing or malformed file
/// - A variable holds an unparsable value
/// - An endpoint is not an absolute URL
pub fn load() -> Result<Config> {
    load_with(|key| std::env::var(key).ok())
}

/// Load configuration reading variables through `lookup`
///
/// # Errors
/// Same as [`load`].
pub fn load_with<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(CONFIG_PATH_ENV).filter(|path| !path.is_empty()) {
        Some(path) => load_from_file(Path::new(&path))?,
        None => Config::default(),
    };

    apply_env_overrides(&mut config, &lookup)?;
    validate(&config)?;

    if !config.client.is_complete() {
        tracing::warn!(
            "{CLIENT_ID_ENV} or {CLIENT_SECRET_ENV} is not set; the provider will reject the login"
        );
    }

    tracing::info!(
        provider = %config.provider.name,
        bind_address = %config.server.bind_address,
        redirect_url = %config.redirect_url(),
        "Configuration loaded"
    );

    Ok(config)
}

/// Load configuration from a file
///
/// Format is detected by extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `AuthFlowError::Config` if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(AuthFlowError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| AuthFlowError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AuthFlowError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AuthFlowError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AuthFlowError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Overwrite `config` with every variable `lookup` knows about
///
/// Unset variables leave the current value untouched.
///
/// # Errors
/// Returns `AuthFlowError::Config` if the timeout is not a whole number.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let set = |target: &mut String, key: &str| {
        if let Some(value) = lookup(key) {
            *target = value.trim().to_string();
        }
    };

    set(&mut config.client.client_id, CLIENT_ID_ENV);
    set(&mut config.client.client_secret, CLIENT_SECRET_ENV);
    set(&mut config.server.bind_address, BIND_ADDRESS_ENV);
    set(&mut config.server.public_url, PUBLIC_URL_ENV);
    set(&mut config.server.static_dir, STATIC_DIR_ENV);
    set(&mut config.provider.authorization_endpoint, AUTHORIZE_URL_ENV);
    set(&mut config.provider.token_endpoint, TOKEN_URL_ENV);
    set(&mut config.provider.api_base_url, API_BASE_URL_ENV);

    if let Some(value) = lookup(OPEN_BROWSER_ENV) {
        config.server.open_browser = parse_bool(&value);
    }
    if let Some(value) = lookup(DUMP_REQUESTS_ENV) {
        config.http.dump_requests = parse_bool(&value);
    }
    if let Some(value) = lookup(SCOPES_ENV) {
        config.provider.scopes = value
            .split(',')
            .map(str::trim)
            .filter(|scope| !scope.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Some(value) = lookup(HTTP_TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
        let secs = value.trim().parse::<u64>().map_err(|e| {
            AuthFlowError::Config(format!("Invalid {HTTP_TIMEOUT_ENV} '{value}': {e}"))
        })?;
        config.http.timeout_secs = Some(secs);
    }

    Ok(())
}

/// Endpoints must be absolute URLs.
fn validate(config: &Config) -> Result<()> {
    let endpoints = [
        ("server.public_url", &config.server.public_url),
        ("provider.authorization_endpoint", &config.provider.authorization_endpoint),
        ("provider.token_endpoint", &config.provider.token_endpoint),
        ("provider.api_base_url", &config.provider.api_base_url),
    ];

    for (name, value) in endpoints {
        Url::parse(value)
            .map_err(|e| AuthFlowError::Config(format!("Invalid {name} '{value}': {e}")))?;
    }

    Ok(())
}

/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
