// ABOUTME: Read-only validation of template identifiers
// ABOUTME: Checks that a template name resolves in the engine's registry

use super::engine::TemplateEngine;
use super::error::{Result, TemplateError};

/// Validate that `name` resolves to exactly one registered template.
///
/// Read-only check with no side effects; returns `TemplateError::NotFound`
/// when the identifier does not resolve.
pub fn validate_template_name(engine: &TemplateEngine, name: &str) -> Result<()> {
    if engine.has_template(name) {
        Ok(())
    } else {
        Err(TemplateError::NotFound(name.to_string()))
    }
}
