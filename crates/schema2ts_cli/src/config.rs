use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use schema2ts::GenerationOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {0} does not exist")]
    NotFound(Utf8PathBuf),

    #[error("failed reading config {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Json {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },
}

/// Generation options persisted as JSON, keyed like the library's options.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub options: GenerationOptions,
    path: Option<Utf8PathBuf>,
}

impl Config {
    pub fn default_path() -> Utf8PathBuf {
        Utf8PathBuf::from("schema2ts.json")
    }

    pub fn with_path(mut self, path: &Utf8Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }

    pub fn path(&self) -> Utf8PathBuf {
        self.path.clone().unwrap_or_else(Self::default_path)
    }

    /// Loads the config at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, unreadable or not a valid options object.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loaded config from {path}");
        Ok(Self {
            options,
            path: Some(path.to_path_buf()),
        })
    }

    /// Like [`Config::load`], but a missing file at the default location
    /// means "use the defaults" rather than an error.
    ///
    /// # Errors
    ///
    /// Fails for an explicitly given path that is missing, or any unreadable
    /// or invalid file.
    pub fn load_or_default(path: &Utf8Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) if path == Self::default_path().as_path() => {
                debug!("no config at {path}, using defaults");
                Ok(Self::default())
            }
            res => res,
        }
    }

    /// Writes the options as pretty JSON to the config path.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self.path();
        let mut content =
            serde_json::to_string_pretty(&self.options).map_err(|source| ConfigError::Json {
                path: path.clone(),
                source,
            })?;
        content.push('\n');
        std::fs::write(&path, content).map_err(|source| ConfigError::Io { path, source })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "schema2ts.json");

        let mut cfg = Config::default().with_path(&path);
        cfg.options.semi = false;
        cfg.options.ignore_keys.insert("password".into());
        cfg.save().unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.options, cfg.options);
        assert_eq!(loaded.path(), path);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "other.json");
        assert!(matches!(
            Config::load_or_default(&path),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "bad.json");
        std::fs::write(&path, "{ \"indent\": \"wide\" }").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Json { .. })));
    }
}
