use std::path::PathBuf;

use thiserror::Error;

use kata_core::DomainError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read inventory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
