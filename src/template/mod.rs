// ABOUTME: Template engine module for texpress
// ABOUTME: Provides LaTeX-safe template rendering with locale-aware filters

pub mod engine;
pub mod error;
pub mod escape;
pub mod filters;
pub mod locale;
pub mod validate;

pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use escape::escape_tex;
pub use locale::TexLocale;
pub use validate::validate_template_name;
