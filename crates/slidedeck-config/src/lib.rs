//! User settings for slidedeck, stored as TOML at `~/.config/slidedeck/config.toml`.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

const DEFAULT_DIAGRAM_LANGUAGE: &str = "mermaid";

fn default_diagram_language() -> String {
    DEFAULT_DIAGRAM_LANGUAGE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `.md` talks. `~` and `$VARS` are expanded on load.
    pub talks_path: PathBuf,
    /// Fence language rendered as a diagram container.
    #[serde(default = "default_diagram_language")]
    pub diagram_language: String,
}

impl Config {
    pub fn new(talks_path: impl Into<PathBuf>) -> Self {
        Self {
            talks_path: talks_path.into(),
            diagram_language: default_diagram_language(),
        }
    }

    pub fn with_diagram_language(mut self, language: impl Into<String>) -> Self {
        self.diagram_language = language.into();
        self
    }

    /// Read a config file. A missing file is `Ok(None)`, not an error.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(expanded) = expand_path(&config.talks_path) {
            config.talks_path = expanded;
        }
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Write the config as TOML, creating parent directories as needed.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        let text = toml::to_string_pretty(self)?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(write_err)?;
        }
        std::fs::write(path, text).map_err(write_err)
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/.config/slidedeck/config.toml").as_ref())
    }
}

/// Expand `~` and environment variables. `None` if a variable is unset.
fn expand_path(path: &Path) -> Option<PathBuf> {
    shellexpand::full(&path.to_string_lossy())
        .ok()
        .map(|expanded| PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn config_lives_under_home_config_dir() {
        let path = Config::config_path();
        let path = path.to_string_lossy();

        assert!(!path.starts_with('~'));
        assert!(path.ends_with(".config/slidedeck/config.toml"));
    }

    #[test]
    fn diagram_language_defaults_to_mermaid() {
        let config: Config = toml::from_str(r#"talks_path = "/talks""#).unwrap();

        assert_eq!(config, Config::new("/talks"));
        assert_eq!(config.diagram_language, "mermaid");
    }

    #[test]
    fn diagram_language_can_be_overridden() {
        let config: Config = toml::from_str(
            r#"
talks_path = "/talks"
diagram_language = "graphviz"
"#,
        )
        .unwrap();

        assert_eq!(config.diagram_language, "graphviz");
    }

    #[test]
    fn tilde_is_expanded() {
        let expanded = expand_path(Path::new("~/talks")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("talks"));
    }

    #[test]
    fn env_vars_are_expanded() {
        unsafe {
            env::set_var("SLIDEDECK_TEST_ROOT", "/test/env/path");
        }

        let expanded = expand_path(Path::new("$SLIDEDECK_TEST_ROOT/talks"));

        unsafe {
            env::remove_var("SLIDEDECK_TEST_ROOT");
        }
        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/talks")));
    }

    #[test]
    fn unset_var_is_not_expanded() {
        assert_eq!(expand_path(Path::new("$SLIDEDECK_SURELY_UNSET_VAR/talks")), None);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();

        let loaded = Config::load_from_path(dir.path().join("nonexistent.toml")).unwrap();

        assert!(loaded.is_none());
    }

    #[test]
    fn directory_instead_of_file_is_read_error() {
        let dir = TempDir::new().unwrap();

        let result = Config::load_from_path(dir.path());

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "talks_path = [").unwrap();

        let result = Config::load_from_path(&file);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("nested").join("config.toml");
        let config = Config::new("/tmp/test-talks").with_diagram_language("plantuml");

        config.save_to_path(&file).unwrap();

        assert_eq!(Config::load_from_path(&file).unwrap(), Some(config));
    }

    #[test]
    fn save_under_a_file_is_write_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = Config::new("/talks").save_to_path(blocker.join("config.toml"));

        assert!(matches!(result, Err(ConfigError::Write { .. })));
    }
}
