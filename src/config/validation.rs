use crate::config::types::{Config, PolitenessConfig, RefetchConfig, SeedConfig, SiteConfig};
use crate::ConfigError;
use std::collections::HashSet;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_seed_config(&config.seeds)?;
    validate_politeness_config(&config.politeness)?;
    validate_refetch_config(&config.refetch)?;
    Ok(())
}

/// Validates site identification
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_host(&config.host)?;
    validate_host(&config.mirror_host)?;

    if config.host == config.mirror_host {
        return Err(ConfigError::Validation(format!(
            "mirror_host must differ from host, both are '{}'",
            config.host
        )));
    }

    if config.seed_scheme != "http" && config.seed_scheme != "https" {
        return Err(ConfigError::Validation(format!(
            "seed_scheme must be 'http' or 'https', got '{}'",
            config.seed_scheme
        )));
    }

    Ok(())
}

/// Validates seed identifier sets
fn validate_seed_config(config: &SeedConfig) -> Result<(), ConfigError> {
    validate_identifiers("region", &config.regions, |c| c.is_ascii_lowercase())?;
    validate_identifiers("category", &config.categories, |c| c.is_ascii_alphanumeric())?;
    Ok(())
}

/// Validates politeness requirements
fn validate_politeness_config(config: &PolitenessConfig) -> Result<(), ConfigError> {
    if config.download_delay_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "download_delay_ms must be >= 100ms, got {}ms",
            config.download_delay_ms
        )));
    }

    Ok(())
}

/// Validates the refetch ceiling
fn validate_refetch_config(config: &RefetchConfig) -> Result<(), ConfigError> {
    if config.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "max_attempts must be >= 1, got {}",
            config.max_attempts
        )));
    }

    Ok(())
}

/// Validates a list of path identifiers: non-empty, allowed characters, no duplicates
fn validate_identifiers(
    kind: &str,
    values: &[String],
    allowed: impl Fn(char) -> bool,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for value in values {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", kind)));
        }

        if !value.chars().all(&allowed) {
            return Err(ConfigError::Validation(format!(
                "{} '{}' contains invalid characters",
                kind, value
            )));
        }

        if !seen.insert(value.as_str()) {
            return Err(ConfigError::Validation(format!(
                "{} '{}' is listed more than once",
                kind, value
            )));
        }
    }

    Ok(())
}

/// Validates a host name (no scheme, no path)
fn validate_host(host: &str) -> Result<(), ConfigError> {
    if host.is_empty() {
        return Err(ConfigError::Validation("host cannot be empty".to_string()));
    }

    // Check for invalid characters
    if !host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "Host '{}' contains invalid characters",
            host
        )));
    }

    if host.starts_with('.') || host.ends_with('.') || host.starts_with('-') || host.ends_with('-')
    {
        return Err(ConfigError::Validation(format!(
            "Host '{}' cannot start or end with '.' or '-'",
            host
        )));
    }

    if host.contains("..") {
        return Err(ConfigError::Validation(format!(
            "Host '{}' cannot contain consecutive dots",
            host
        )));
    }

    if !host.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Host '{}' must contain at least one dot (e.g., 'tabelog.com')",
            host
        )));
    }

    Ok(())
}
