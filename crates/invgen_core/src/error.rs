use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvgenError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed document {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}

impl InvgenError {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Malformed { .. } => 500,
            Self::Io { .. } => 500,
            Self::Internal(_) => 500,
        }
    }
}
