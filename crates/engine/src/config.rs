//! Composer configuration via `traitmix.toml`
//!
//! Everything has a default, so an absent file and an empty file behave the
//! same. The defaults reproduce plain composition semantics: duplicate trait
//! names stay in provenance and an empty reference list yields an empty
//! composite.

use serde::{Deserialize, Serialize};
use std::path::Path;

use traitmix_core::{Error, Result};

/// Config file name looked up by callers that keep one next to their data
pub const CONFIG_FILE_NAME: &str = "traitmix.toml";

/// How repeated trait names are recorded in provenance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvenancePolicy {
    /// Record every listed name, repeats included
    #[default]
    KeepDuplicates,
    /// Record only the first occurrence of each name
    FirstOccurrence,
}

/// Composer configuration loaded from `traitmix.toml`.
///
/// # Example
///
/// ```toml
/// provenance = "keep_duplicates"
/// allow_empty = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Duplicate handling for provenance records.
    #[serde(default)]
    pub provenance: ProvenancePolicy,
    /// Whether composing zero traits is allowed.
    #[serde(default = "default_allow_empty")]
    pub allow_empty: bool,
}

fn default_allow_empty() -> bool {
    true
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            provenance: ProvenancePolicy::default(),
            allow_empty: default_allow_empty(),
        }
    }
}

impl ComposerConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# traitmix composer configuration
#
# Provenance policy: "keep_duplicates" (default) or "first_occurrence"
#   "keep_duplicates"  = every listed trait name is recorded, repeats included
#   "first_occurrence" = each name is recorded once, at its first position
# Member precedence (last listed trait wins) is the same under both.
provenance = "keep_duplicates"

# Allow composing an empty trait list (default: true)
allow_empty = true
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the text does not parse or names an
    /// unknown policy.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::InvalidConfig`] if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig(msg) => {
                Error::InvalidConfig(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
