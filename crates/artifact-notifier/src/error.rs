use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {var} is not set or is empty")]
    Missing { var: &'static str },

    #[error("environment variable {var} is not valid UTF-8")]
    NotUnicode { var: &'static str },
}

#[derive(Debug, Error)]
pub enum NotifyError {
    /// The derived artifact path does not exist.
    #[error("APK file not found: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("reading artifact {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sendDocument request failed")]
    Http(#[from] reqwest::Error),
}

pub type Result<T, E = NotifyError> = std::result::Result<T, E>;
