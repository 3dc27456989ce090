use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::provider::Provider;
use crate::uri::DEFAULT_REF;

/// Default configuration embedded in the binary.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("assets/config.toml");

/// Error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}':\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Filenames to search for project-level configuration.
const CONFIG_FILENAMES: &[&str] = &["git-uri.toml", ".git-uri.toml"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Values filled in when a reference leaves them out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Ref used when the input has no `#ref`.
    #[serde(rename = "ref", default = "default_ref")]
    pub reference: String,

    /// Provider used when the input has no `provider:` prefix.
    #[serde(default)]
    pub provider: Provider,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            reference: default_ref(),
            provider: Provider::default(),
        }
    }
}

impl Config {
    /// Resolve and read the configuration.
    ///
    /// An explicit `path` must exist. Without one the first file found wins:
    /// `git-uri.toml`/`.git-uri.toml` from the working directory upwards, then
    /// `config.toml` in the user config dir. With neither, the defaults apply.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::discover() {
                Some(path) => path,
                None => {
                    tracing::trace!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        Self::read(&path)
    }

    /// Same as [`Config::load_from`] without an explicit path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// The config file that would be used, if any.
    pub fn discover() -> Option<PathBuf> {
        let project = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::project_file(&cwd));
        project.or_else(Self::user_file)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        tracing::trace!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Nearest project config at or above `dir`.
    fn project_file(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .flat_map(|dir| CONFIG_FILENAMES.iter().map(move |name| dir.join(name)))
            .find(|candidate| candidate.is_file())
    }

    fn user_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "git-uri")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .filter(|path| path.is_file())
    }
}

fn default_ref() -> String {
    DEFAULT_REF.to_owned()
}
