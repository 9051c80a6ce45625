use std::io;
use std::path::PathBuf;

/// Failures at the file boundary. Conversion itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
