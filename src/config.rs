// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. a YAML file (`--config <file>`, else `gallery.yaml` when present)
//! 3. `GALLERY_LANG`, `GALLERY_BASE_URL` and `GALLERY_CATALOG`
//! 4. command-line flags (applied by the binary)

use crate::error::ConfigError;
use crate::i18n::Lang;
use crate::registry::{self, ProjectRegistry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "gallery.yaml";

const LANG_ENV: &str = "GALLERY_LANG";
const BASE_URL_ENV: &str = "GALLERY_BASE_URL";
const CATALOG_ENV: &str = "GALLERY_CATALOG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Display language.
    pub lang: Lang,
    /// Prefix for printed links, everything before the `#`.
    pub base_url: String,
    /// Catalog file replacing the built-in list.
    pub catalog: Option<PathBuf>,
}

impl GalleryConfig {
    /// Load the file layer. An explicit path must exist; the default file
    /// is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = serde_yaml::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        // Relative catalog paths are relative to the config file.
        let dir = path.parent().filter(|dir| !dir.as_os_str().is_empty());
        if let (Some(dir), Some(catalog)) = (dir, config.catalog.as_mut()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        tracing::debug!(path = %path.display(), "configuration file loaded");
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(code) = lookup(LANG_ENV) {
            self.lang = Lang::from_code(&code).ok_or(ConfigError::UnknownLang(code))?;
        }
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.base_url = base_url;
        }
        if let Some(catalog) = lookup(CATALOG_ENV) {
            self.catalog = Some(PathBuf::from(catalog));
        }
        Ok(())
    }

    /// The registry this configuration selects.
    pub fn registry(&self) -> Result<ProjectRegistry, ConfigError> {
        match &self.catalog {
            Some(path) => registry::load_catalog(path),
            None => Ok(registry::shared()?.clone()),
        }
    }
}
