// ABOUTME: Error types for template engine operations
// ABOUTME: Defines specific error types for template lookup, parsing and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template syntax error: {0}")]
    Syntax(String),

    #[error("Template render error: {0}")]
    Render(String),

    #[error("Unknown locale tag: {0}")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
