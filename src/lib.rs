//! brittle: article search and visitor state for the brittle.systems blog
//!
//! The crate has two independent halves. [`search`] is the incremental
//! article filter behind the landing page search box. [`server`] provides
//! the anonymous visitor identifier and per-visitor scroll position
//! endpoints, backed by a [`store::KeyValueStore`].

pub mod commands;
pub mod config;
pub mod content;
pub mod search;
pub mod server;
pub mod store;

use anyhow::Result;
use std::path::Path;

/// A site checkout on disk
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Open a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        })
    }

    /// Load all published articles
    pub fn articles(&self) -> Result<Vec<content::Article>> {
        content::ContentLoader::new(self).load_articles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_site_defaults_without_config() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.source_dir, tmp.path().join("source"));
        assert_eq!(site.public_dir, tmp.path().join("public"));
        assert!(!site.config.production);
    }

    #[test]
    fn test_site_reads_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "source_dir: content\nproduction: true\n",
        )
        .unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.source_dir, tmp.path().join("content"));
        assert!(site.config.production);
    }
}
