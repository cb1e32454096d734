//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/revtree/revtree.toml`
//! 3. Environment variables: `REVTREE_*` prefix
//!
//! CLI flags override all of these.

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::codec::ParsePolicy;
use crate::errors::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Catalog file used when no `--file` argument is given
    pub catalog_file: PathBuf,
    /// Reject malformed records instead of silently dropping them
    pub strict_parsing: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_file: PathBuf::from("casino.txt"),
            strict_parsing: false,
        }
    }
}

impl Settings {
    /// Load settings with the layered precedence above.
    ///
    /// A missing global config file is fine; a present but invalid one is a
    /// configuration error.
    pub fn load() -> CatalogResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }
        builder = builder.add_source(Environment::with_prefix("REVTREE"));

        let merged = builder.build().map_err(config_error)?;
        merged.try_deserialize().map_err(config_error)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "revtree").map(|dirs| dirs.config_dir().join("revtree.toml"))
    }

    pub fn parse_policy(&self) -> ParsePolicy {
        if self.strict_parsing {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Lenient
        }
    }

    /// Render as a TOML template (used by `config show` and `config init`).
    pub fn to_toml(&self) -> CatalogResult<String> {
        toml::to_string_pretty(self).map_err(|e| CatalogError::Config(e.to_string()))
    }
}

fn config_error(e: config::ConfigError) -> CatalogError {
    CatalogError::Config(e.to_string())
}
