use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid theme: {0}")]
    Invalid(String),
}
