use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write assessment: {0}")]
    Io(#[from] std::io::Error),

    #[error("no native save dialog can be shown here")]
    DialogUnavailable,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
