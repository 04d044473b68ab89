//! Site configuration management for `taxogen.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[build]` | Site directory layout (content, categories)      |
//! | `[page]`  | Generated page shape (layout, permalink, naming) |
//! | `[scan]`  | Tag harvesting (front-matter keys, extensions)   |
//! | `[extra]` | User-defined custom fields                       |
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"
//! categories = "categories"
//!
//! [page]
//! layout = "category"
//! permalink = "/categories"
//!
//! [scan]
//! keys = ["tags", "categories"]
//!
//! [extra]
//! maintainer = "alice"
//! ```

mod build;
pub mod defaults;
mod error;
mod page;
mod scan;

// Internal imports used in this module
use build::BuildConfig;
use error::ConfigError;
use page::PageConfig;
use scan::ScanConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing taxogen.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site directory layout
    #[serde(default)]
    pub build: BuildConfig,

    /// Generated page settings
    #[serde(default)]
    pub page: PageConfig,

    /// Tag harvesting settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        self.set_root(&root);
        self.update_path_with_root(&root);

        match &cli.command {
            Commands::Regen {
                sorted,
                slug_filenames,
                ..
            } => {
                Self::update_option(&mut self.page.sorted, sorted.as_ref());
                Self::update_option(&mut self.page.slug_filenames, slug_filenames.as_ref());
            }
            Commands::Tags { sorted } => {
                Self::update_option(&mut self.page.sorted, sorted.as_ref());
            }
            Commands::Filter { .. } => {}
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.categories, cli.categories.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all directory paths
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.categories = Self::normalize_path(&root.join(&self.build.categories));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command.
    ///
    /// The categories directory is wiped on every run, so the path checks
    /// here are the only guard between a config typo and deleting a
    /// directory the user cares about.
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        let root = self.get_root();
        let categories = self.build.categories.as_path();
        let content = self.build.content.as_path();

        if categories == root || !categories.starts_with(root) {
            bail!(ConfigError::Validation(
                "[build.categories] must be a directory inside the site root".into()
            ));
        }

        if categories.starts_with(content) || content.starts_with(categories) {
            bail!(ConfigError::Validation(
                "[build.categories] must not overlap [build.content]".into()
            ));
        }

        if !self.page.permalink.starts_with('/') {
            bail!(ConfigError::Validation(
                "[page.permalink] must start with /".into()
            ));
        }

        if self.scan.keys.is_empty() {
            bail!(ConfigError::Validation(
                "[scan.keys] must have at least one element".into()
            ));
        }

        if self.scan.extensions.is_empty() {
            bail!(ConfigError::Validation(
                "[scan.extensions] must have at least one element".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
