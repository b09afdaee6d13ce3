//! Configuration loading for `.salescope.toml`.
//!
//! The config file is optional. It is discovered by walking up from the
//! current directory, and any problem reading or parsing it degrades to the
//! built-in defaults with a warning rather than aborting the run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::TermField;

/// Search behaviour configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fields the free-text term matches against
    #[serde(default = "default_term_fields")]
    pub term_fields: Vec<TermField>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            term_fields: default_term_fields(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when the command line does not specify one
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalescopeConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_term_fields() -> Vec<TermField> {
    TermField::DEFAULT.to_vec()
}

fn default_format() -> String {
    "terminal".to_string()
}

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_config(contents: &str) -> Result<SalescopeConfig, String> {
    let config = toml::from_str::<SalescopeConfig>(contents)
        .map_err(|e| format!("Failed to parse .salescope.toml: {}", e))?;

    if config.search.term_fields.is_empty() {
        return Err("search.term_fields must name at least one field".to_string());
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SalescopeConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub(crate) fn directory_ancestors(
    start: PathBuf,
    max_depth: usize,
) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from `.salescope.toml` if it exists
pub fn load_config() -> SalescopeConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return SalescopeConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".salescope.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SalescopeConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SalescopeConfig::default());
        assert_eq!(
            config.search.term_fields,
            [TermField::Description, TermField::Sku]
        );
        assert_eq!(config.output.default_format, "terminal");
    }

    #[test]
    fn term_fields_can_include_customer() {
        let config = parse_config(
            r#"
            [search]
            term_fields = ["description", "sku", "customer"]
            "#,
        )
        .unwrap();
        assert_eq!(
            config.search.term_fields,
            [TermField::Description, TermField::Sku, TermField::Customer]
        );
    }

    #[test]
    fn empty_term_fields_is_rejected() {
        let err = parse_config("[search]\nterm_fields = []\n").unwrap_err();
        assert!(err.contains("term_fields"));
    }

    #[test]
    fn unknown_term_field_is_a_parse_error() {
        assert!(parse_config("[search]\nterm_fields = [\"invoice\"]\n").is_err());
    }

    #[test]
    fn ancestors_stop_at_root() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 10).collect();
        assert_eq!(
            dirs,
            [
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/"),
            ]
        );
    }
}
