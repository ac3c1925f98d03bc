// ABOUTME: Error types for LaTeX compilation
// ABOUTME: Distinguishes a missing interpreter from a failed compiler run

use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum CompileError {
    /// The configured interpreter binary could not be located or executed.
    #[error("LaTeX interpreter not found: {0}")]
    CompilerNotFound(String),

    /// The interpreter ran and reported failure; carries the raw log verbatim.
    #[error("LaTeX compilation failed:\n{log}")]
    CompilationFailed { log: String },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompileError>;
