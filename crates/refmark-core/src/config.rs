//! Site configuration
//!
//! All lookup tables and site constants live in one TOML document, loaded
//! once per run and injected into the pipelines. Every key is optional;
//! anything missing falls back to the built-in tables for the IMathLib
//! reference site. Table entries are stored raw; escaping happens at rule
//! compilation, never in the data.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::highlight::HighlightTables;
use crate::link::LinkTables;
use crate::tables;

/// Configuration for one documentation site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory segment that roots every generated link; the base path of
    /// a page is its location up to and including this segment.
    pub anchor: String,
    /// Highlighter keyword tables and palette.
    pub highlight: HighlightTables,
    /// Linker lookup tables and home-link rewrite.
    pub link: LinkTables,
}

impl SiteConfig {
    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Parse a configuration document; `path` is reported in errors.
    pub fn from_toml_str(text: &str, path: impl AsRef<Path>) -> Result<Self, Error> {
        toml::from_str(text).map_err(|source| Error::ConfigParse {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

// Derived Default would leave `anchor` empty; every field defaults to the
// built-in site tables instead.
impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            anchor: tables::ANCHOR_SEGMENT.to_string(),
            highlight: HighlightTables::default(),
            link: LinkTables::default(),
        }
    }
}
