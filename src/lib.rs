// ABOUTME: Main library module for texpress
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod compile;
pub mod config;
pub mod response;
pub mod template;

// Re-export commonly used types
pub use compile::{CompileError, CompileJob, TexCompiler};
pub use config::TexConfig;
pub use response::{pdf_attachment, pdf_response};
pub use template::{validate_template_name, TemplateEngine, TemplateError, TexLocale};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
