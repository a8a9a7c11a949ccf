//! Frontend configuration module
//!
//! Settings are baked in at build time from `TODO_*` environment variables
//! and fall back to the shared client defaults.

use shared::config::ClientConfig;

/// Resolves the client configuration for the browser build.
///
/// An invalid build-time value is reported on the console and replaced by
/// the default configuration.
pub fn load() -> ClientConfig {
    let config = from_build_env(
        option_env!("TODO_API_URL"),
        option_env!("TODO_TOKEN_KEY"),
        option_env!("TODO_NOTIFICATION_TIMEOUT_MS"),
    );

    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            web_sys::console::warn_1(&format!("Ignoring build configuration: {err}").into());
            ClientConfig::with_defaults()
        }
    }
}

fn from_build_env(
    api_url: Option<&str>,
    token_key: Option<&str>,
    timeout_ms: Option<&str>,
) -> ClientConfig {
    let mut config = ClientConfig::with_defaults();
    if let Some(url) = api_url.filter(|url| !url.is_empty()) {
        config.api_base_url = url.to_string();
    }
    if let Some(key) = token_key.filter(|key| !key.is_empty()) {
        config.token_storage_key = key.to_string();
    }
    if let Some(timeout) = timeout_ms.and_then(|value| value.trim().parse().ok()) {
        config.notification_timeout_ms = timeout;
    }
    config
}
