//! Configuration types for bashlint.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::walker::DEFAULT_PATTERNS;

/// Config file names looked up in the working directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["bashlint.toml", ".bashlint.toml"];

/// Top-level configuration for bashlint.
///
/// No setting changes which rules run; configuration only affects which
/// files are checked and how violations are printed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File selection.
    #[serde(default)]
    pub files: FilesConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration for a run.
    ///
    /// An `explicit` path must exist. Otherwise the first of
    /// [`CONFIG_FILE_NAMES`] present in `dir` is used, and defaults apply
    /// when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed.
    pub fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let found = explicit.map(Path::to_path_buf).or_else(|| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        });

        match found {
            Some(path) => {
                debug!("Using config: {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Which files to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    /// Glob patterns matched against file names. Empty matches every file.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
        }
    }
}

fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| (*p).to_string()).collect()
}

/// How violations are printed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Print the offending line and a `^` pointer under each violation.
    #[serde(default)]
    pub show_source: bool,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.files.patterns, vec!["*.sh".to_string()]);
        assert!(!config.output.show_source);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::parse("").expect("empty config parses");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[files]
patterns = ["*.sh", "*.bash"]

[output]
show_source = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.files.patterns, vec!["*.sh", "*.bash"]);
        assert!(config.output.show_source);
    }

    #[test]
    fn test_empty_patterns_are_kept() {
        let config = Config::parse("[files]\npatterns = []\n").expect("Failed to parse");
        assert!(config.files.patterns.is_empty());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::parse("[rules]\nseverity = \"error\"\n").expect_err("unknown table");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_discover_without_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::discover(dir.path(), None).expect("defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_prefers_plain_name_over_dotfile() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("bashlint.toml"), "[output]\nshow_source = true\n")
            .expect("write");
        std::fs::write(dir.path().join(".bashlint.toml"), "[files]\npatterns = []\n")
            .expect("write");

        let config = Config::discover(dir.path(), None).expect("parse");
        assert!(config.output.show_source);
        assert_eq!(config.files, FilesConfig::default());
    }

    #[test]
    fn test_discover_finds_dotfile() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(".bashlint.toml"), "[files]\npatterns = []\n")
            .expect("write");

        let config = Config::discover(dir.path(), None).expect("parse");
        assert!(config.files.patterns.is_empty());
    }

    #[test]
    fn test_discover_explicit_wins_and_must_exist() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("bashlint.toml"), "[output]\nshow_source = true\n")
            .expect("write");
        let custom = dir.path().join("custom.toml");
        std::fs::write(&custom, "[files]\npatterns = [\"*.bash\"]\n").expect("write");

        let config = Config::discover(dir.path(), Some(&custom)).expect("parse");
        assert_eq!(config.files.patterns, vec!["*.bash"]);
        assert!(!config.output.show_source);

        let err = Config::discover(dir.path(), Some(&dir.path().join("missing.toml")))
            .expect_err("explicit file must exist");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Config::from_file(&dir.path().join("bashlint.toml")).expect_err("missing");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
