use std::path::PathBuf;

use thiserror::Error;

use crate::platform::Platform;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{browser} browser is not supported on {platform}")]
    UnsupportedBrowser { browser: String, platform: Platform },

    #[error("extraction failed for {}: {message}", path.display())]
    Extraction { path: PathBuf, message: String },

    #[error("parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid format {requested}, should be one of {valid}")]
    UnsupportedFormat { requested: String, valid: String },

    #[error("failed to render output: {0}")]
    Render(String),
}

impl Error {
    pub fn extraction(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Error::Extraction {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Error::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
