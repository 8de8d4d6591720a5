//! Configuration loading for Sift.
//!
//! Reads `~/.sift/config.toml` if present. A missing file is not an error;
//! every setting has a default.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct SiftConfig {
    pub layout: Option<LayoutSection>,
    pub ui: Option<UiSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LayoutSection {
    /// Width threshold between compact and wide layout, in columns.
    pub breakpoint: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiSection {
    /// Use ASCII-only glyphs for indicators.
    #[serde(default)]
    pub ascii_only: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl SiftConfig {
    /// Load the config file, if one exists.
    ///
    /// Returns `Ok(None)` when the path cannot be determined or the file is
    /// absent. Read and parse failures are reported so the caller can decide
    /// whether to proceed with defaults.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Configured breakpoint, if any.
    #[must_use]
    pub fn breakpoint(&self) -> Option<u16> {
        self.layout.as_ref().and_then(|layout| layout.breakpoint)
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.ui.as_ref().is_some_and(|ui| ui.ascii_only)
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sift").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::SiftConfig;
    use std::io::Write;

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: SiftConfig = toml::from_str("").unwrap();
        assert_eq!(config.breakpoint(), None);
        assert!(!config.ascii_only());
    }

    #[test]
    fn sections_are_read() {
        let config: SiftConfig = toml::from_str(
            "[layout]\nbreakpoint = 100\n\n[ui]\nascii_only = true\n",
        )
        .unwrap();
        assert_eq!(config.breakpoint(), Some(100));
        assert!(config.ascii_only());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = SiftConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[layout\nbreakpoint = ").unwrap();

        let err = SiftConfig::load_from(&path).unwrap_err();
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn well_formed_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\nbreakpoint = 120\n").unwrap();

        let config = SiftConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config.breakpoint(), Some(120));
    }
}
