use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub headings: HeadingsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HeadingsConfig {
    /// Close an open list before a heading. Off by default, so a heading
    /// between list items leaves the list open.
    pub close_open_lists: bool,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub trailing_newline: bool,
}

impl Config {
    /// The bundled defaults, checked by the build script.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config not found, using defaults");
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
