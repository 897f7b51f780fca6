//! Configuration management for tagmark.
//!
//! Parses `tagmark.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [expand]
//! fail_on_error = false
//! error_comments = true
//!
//! [markdown]
//! extensions = ["fenced_code", "tables", "toc"]
//!
//! [blocks]
//! disabled = ["hero"]
//! ```
//!
//! Caller settings can be applied during load via [`ConfigOverrides`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tagmark.toml";

/// Markdown extensions enabled when `[markdown] extensions` is not set.
pub const DEFAULT_EXTENSIONS: [&str; 7] = [
    "list_fixer",
    "fenced_code",
    "tables",
    "line_breaks",
    "footnotes",
    "attr_list",
    "toc",
];

/// Settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    /// Override strict mode.
    pub fail_on_error: Option<bool>,
    /// Override comment placeholders for failed tags.
    pub error_comments: Option<bool>,
    /// Replace the markdown extension list.
    pub extensions: Option<Vec<String>>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Block expansion behaviour.
    pub expand: ExpandConfig,
    /// Markdown conversion.
    pub markdown: MarkdownConfig,
    /// Built-in block selection.
    pub blocks: BlocksConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Block expansion configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    /// Abort on the first unknown tag or render failure.
    pub fail_on_error: bool,
    /// Leave an HTML comment where a tag failed instead of nothing.
    pub error_comments: bool,
}

/// Markdown conversion configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Extension names, e.g. `tables` or `toc`.
    pub extensions: Vec<String>,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|&e| e.to_owned()).collect(),
        }
    }
}

/// Built-in block configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlocksConfig {
    /// Built-in blocks to leave unregistered.
    pub disabled: Vec<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require every entry of a list to be non-empty and unique.
fn require_unique_names(values: &[String], field: &str) -> Result<(), ConfigError> {
    for (i, value) in values.iter().enumerate() {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{field} cannot contain empty names"
            )));
        }
        if values[..i].contains(value) {
            return Err(ConfigError::Validation(format!(
                "{field} lists '{value}' more than once"
            )));
        }
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tagmark.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// Overrides are applied after loading and validated together with the
    /// file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the result is invalid.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_from(&cwd)),
        };

        let mut config = match discovered {
            Some(path) => Self::load_from_file(&path)?,
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Self::default()
            }
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }
        config.validate()?;

        Ok(config)
    }

    /// Search for a config file in `start` and its parents.
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Apply overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(fail_on_error) = overrides.fail_on_error {
            self.expand.fail_on_error = fail_on_error;
        }
        if let Some(error_comments) = overrides.error_comments {
            self.expand.error_comments = error_comments;
        }
        if let Some(extensions) = &overrides.extensions {
            self.markdown.extensions.clone_from(extensions);
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`]. Extension and block names are
    /// only checked for shape here; whether they exist is decided by the
    /// pipeline that consumes them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_unique_names(&self.markdown.extensions, "markdown.extensions")?;
        require_unique_names(&self.blocks.disabled, "blocks.disabled")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.expand.fail_on_error);
        assert!(!config.expand.error_comments);
        assert_eq!(config.markdown.extensions, DEFAULT_EXTENSIONS);
        assert!(config.blocks.disabled.is_empty());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.markdown.extensions.len(), 7);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[expand]
fail_on_error = true
error_comments = true

[markdown]
extensions = ["tables", "toc"]

[blocks]
disabled = ["hero", "quote"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.expand.fail_on_error);
        assert!(config.expand.error_comments);
        assert_eq!(config.markdown.extensions, vec!["tables", "toc"]);
        assert_eq!(config.blocks.disabled, vec!["hero", "quote"]);
    }

    #[test]
    fn test_unknown_field_type_is_parse_error() {
        let result: Result<Config, _> = toml::from_str("[expand]\nfail_on_error = \"yes\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_extension() {
        let mut config = Config::default();
        config.markdown.extensions = vec!["toc".to_owned(), "toc".to_owned()];
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: markdown.extensions lists 'toc' more than once"
        );
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut config = Config::default();
        config.blocks.disabled = vec![" ".to_owned()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("blocks.disabled"));
    }

    #[test]
    fn test_empty_extension_list_is_valid() {
        let mut config = Config::default();
        config.markdown.extensions.clear();
        config.validate().unwrap();
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        let overrides = ConfigOverrides {
            fail_on_error: Some(true),
            extensions: Some(vec!["tables".to_owned()]),
            ..Default::default()
        };

        config.apply_overrides(&overrides);

        assert!(config.expand.fail_on_error);
        assert!(!config.expand.error_comments); // Unchanged
        assert_eq!(config.markdown.extensions, vec!["tables"]);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[expand]\nerror_comments = true\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert!(config.expand.error_comments);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[markdown\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = ConfigOverrides {
            extensions: Some(vec!["toc".to_owned(), "toc".to_owned()]),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_discover_from_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guides");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_from(&nested).unwrap();

        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_discover_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        std::fs::write(nested.join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_from(&nested),
            Some(nested.join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_discover_ignores_directory_named_like_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(CONFIG_FILENAME)).unwrap();

        let found = Config::discover_from(dir.path());

        assert_ne!(found, Some(dir.path().join(CONFIG_FILENAME)));
    }
}
