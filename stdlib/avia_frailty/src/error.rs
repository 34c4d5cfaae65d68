//! Error type shared by model loading and inference.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a frailty model or scoring a patient.
///
/// Classification itself never fails; see [`crate::risk::classify`].
#[derive(Debug, Error)]
pub enum FrailtyError {
    #[error("model file not found at: {}", path.display())]
    MissingArtifact { path: PathBuf },
    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("inference failed: {0}")]
    Inference(String),
}

impl FrailtyError {
    /// True when the model artifact itself is absent, as opposed to unreadable or malformed.
    pub fn is_missing_artifact(&self) -> bool {
        matches!(self, FrailtyError::MissingArtifact { .. })
    }
}
