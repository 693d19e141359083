//! CLI-specific error types

use thiserror::Error;

use crate::designer::DesignerError;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pipeline stage failed
    #[error(transparent)]
    Designer(#[from] DesignerError),

    /// Readline/input error
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// IO error (stdout, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
