//! Configuration command handlers
//!
//! Handles the `configure` subcommand for storing the API key and endpoint.

use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
///
/// # Arguments
/// * `api_key` - Optional Divine Pride API key to store
/// * `base_url` - Optional API base URL to store
/// * `show` - If true, show current configuration
pub fn handle(api_key: Option<String>, base_url: Option<String>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if apply(&mut config, api_key, base_url) {
        config.save()?;
        println!("Configuration updated");
        if let Ok(path) = Config::config_path() {
            println!("Config saved to: {}", path.display());
        }
    } else {
        show_usage();
    }

    Ok(())
}

/// Apply the given settings, returning whether anything changed
fn apply(config: &mut Config, api_key: Option<String>, base_url: Option<String>) -> bool {
    let mut changed = false;

    if let Some(key) = api_key {
        config.set_api_key(key);
        changed = true;
    }
    if let Some(url) = base_url {
        config.set_base_url(url);
        changed = true;
    }

    changed
}

/// Display current configuration
fn show_config(config: &Config) {
    match config.get_api_key() {
        Some(key) => println!("API key: {}", mask_key(key)),
        None => println!("No API key configured"),
    }
    println!("Base URL: {}", config.base_url());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Keep the first four characters of a key visible
fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    let hidden = key.chars().count().saturating_sub(4);
    format!("{}{}", visible, "*".repeat(hidden))
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: dp2rathena configure --api-key YOUR_API_KEY");
    println!("   or: dp2rathena configure --base-url URL");
    println!("   or: dp2rathena configure --show");
    println!();
    println!("Note: Get an API key from your Divine Pride account page.");
    println!("      DIVINEPRIDE_API_KEY overrides the stored key.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_config_path_exists() {
        let result = Config::config_path();
        assert!(result.is_ok());
    }

    #[test]
    fn test_apply_settings() {
        let mut config = Config::default();
        assert!(!apply(&mut config, None, None));
        assert_eq!(config, Config::default());

        assert!(apply(&mut config, Some("key".into()), None));
        assert_eq!(config.get_api_key(), Some("key"));

        assert!(apply(&mut config, None, Some("http://localhost".into())));
        assert_eq!(config.base_url(), "http://localhost");
        assert_eq!(config.get_api_key(), Some("key"));
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("abcdef12"), "abcd****");
        assert_eq!(mask_key("abc"), "abc");
    }
}
