use crate::seed::{CATEGORIES, REGIONS};
use serde::Deserialize;

/// Main configuration structure for Tabelog-Harvest
///
/// Every section is optional; an empty file yields `Config::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub site: SiteConfig,
    pub seeds: SeedConfig,
    pub politeness: PolitenessConfig,
    pub refetch: RefetchConfig,
    pub extract: ExtractConfig,
    pub output: OutputConfig,
}

/// Target site identification
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Canonical host all link rules are anchored to
    pub host: String,

    /// Mirror host whose links are never followed
    pub mirror_host: String,

    /// Scheme used when building seed URLs
    pub seed_scheme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: "tabelog.com".to_string(),
            mirror_host: "s.tabelog.com".to_string(),
            seed_scheme: "http".to_string(),
        }
    }
}

/// Identifier sets whose cartesian product seeds the crawl
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SeedConfig {
    /// Region slugs (e.g. "tokyo")
    pub regions: Vec<String>,

    /// Category identifiers (e.g. "ramen", "RC0102")
    pub categories: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            regions: REGIONS.iter().map(|r| r.to_string()).collect(),
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Politeness requirement handed to the crawl engine
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PolitenessConfig {
    /// Minimum delay between requests to the site (milliseconds)
    pub download_delay_ms: u64,
}

impl Default for PolitenessConfig {
    fn default() -> Self {
        Self {
            download_delay_ms: 1000,
        }
    }
}

/// Challenge-page refetch policy
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RefetchConfig {
    /// Challenge pages tolerated per URL before giving up
    pub max_attempts: u32,
}

impl Default for RefetchConfig {
    fn default() -> Self {
        Self { max_attempts: 5 }
    }
}

/// Extraction switches
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExtractConfig {
    /// Emit reviewer records alongside reviews
    pub emit_users: bool,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// JSON-lines file for emitted entities; stdout when unset
    pub path: Option<String>,
}
