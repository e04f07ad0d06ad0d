//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,
    pub root: String,
    /// Cookie domain used in production
    pub domain: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Content
    pub default_category: String,
    /// How many categories the "Recently updated" list shows
    pub recent_categories: usize,

    // Deployment
    pub production: bool,
    /// Lifetime of the visitor cookie in seconds (browser session when unset)
    pub cookie_max_age: Option<i64>,
    #[serde(default)]
    pub store: StoreConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "brittle.systems".to_string(),
            url: "https://brittle.systems".to_string(),
            root: "/".to_string(),
            domain: "brittle.systems".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            default_category: "uncategorized".to_string(),
            recent_categories: 5,

            production: false,
            cookie_max_age: None,
            store: StoreConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Which key-value driver backs the visitor state endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreDriver {
    /// Process-local map, lost on restart
    Memory,
    /// JSON file on disk
    File,
}

/// Key-value store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub driver: StoreDriver,
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            driver: StoreDriver::Memory,
            path: PathBuf::from(".brittle-store/kv.json"),
        }
    }
}
