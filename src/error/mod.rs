//! Error types for podctl

use thiserror::Error;

/// Main error type for podctl
#[derive(Debug, Error)]
pub enum PodctlError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Selection cancelled")]
    Cancelled,

    #[error("Nothing to select: no {kind} available")]
    NoOptions { kind: &'static str },

    #[error("Selection failed: {0}")]
    Prompt(String),

    #[error("Shell session exited with status {code}")]
    ShellExit { code: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PodctlError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PodctlError::ShellExit { code } => *code,
            _ => 1,
        }
    }
}

/// Result type alias for podctl
pub type Result<T> = std::result::Result<T, PodctlError>;
