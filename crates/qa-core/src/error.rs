use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("unknown artifact: {0} (run 'list' to see the available kinds)")]
    UnknownArtifact(String),

    #[error("template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("refusing to overwrite {} (pass --force to overwrite)", path.display())]
    OverwriteRefused { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QaError>;
