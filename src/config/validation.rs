use crate::config::types::{
    BoredGameConfig, Config, CrawlConfig, HttpConfig, OutputConfig, PokeVoltConfig,
    TcgRepublicConfig,
};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_crawl_config(&config.crawl)?;
    validate_output_config(&config.output)?;
    validate_bored_game(&config.bored_game_company)?;
    validate_tcg_republic(&config.tcg_republic)?;
    validate_pokevolt(&config.pokevolt)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "max_attempts must be >= 1, got {}",
            config.max_attempts
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "request_timeout_secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawl limits
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.catalog_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "catalog_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_bored_game(config: &BoredGameConfig) -> Result<(), ConfigError> {
    validate_base_url(&config.base_url)?;

    if !config.search_query.starts_with('?') {
        return Err(ConfigError::Validation(format!(
            "search_query must start with '?', got '{}'",
            config.search_query
        )));
    }

    validate_timeout(config.timeout_secs)
}

fn validate_tcg_republic(config: &TcgRepublicConfig) -> Result<(), ConfigError> {
    validate_base_url(&config.base_url)?;

    if !config.category_path.starts_with('/') || !config.category_path.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "category_path must start and end with '/', got '{}'",
            config.category_path
        )));
    }

    validate_timeout(config.timeout_secs)
}

fn validate_pokevolt(config: &PokeVoltConfig) -> Result<(), ConfigError> {
    validate_base_url(&config.base_url)?;
    validate_timeout(config.timeout_secs)?;

    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 50 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_fetches must be between 1 and 50, got {}",
            config.max_concurrent_fetches
        )));
    }

    let mut keys = HashSet::new();
    for section in &config.sections {
        if section.key.is_empty() {
            return Err(ConfigError::Validation(
                "PokeVolt section key cannot be empty".to_string(),
            ));
        }

        if !keys.insert(section.key.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Duplicate PokeVolt section key '{}'",
                section.key
            )));
        }

        if !section.path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "PokeVolt section '{}' path must start with '/', got '{}'",
                section.key, section.path
            )));
        }
    }

    Ok(())
}

/// Validates a storefront base URL: http(s), no trailing slash
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url '{}': {}", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            base_url
        )));
    }

    if base_url.ends_with('/') {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must not end with '/'",
            base_url
        )));
    }

    Ok(())
}

fn validate_timeout(timeout_secs: Option<u64>) -> Result<(), ConfigError> {
    match timeout_secs {
        Some(0) => Err(ConfigError::Validation(
            "timeout_secs must be >= 1 when set".to_string(),
        )),
        _ => Ok(()),
    }
}
