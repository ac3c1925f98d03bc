// ABOUTME: Command implementations for the texpress CLI
// ABOUTME: Handles execution of compile, render, and check commands

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tera::Context;
use tracing::info;

use crate::compile::TexCompiler;
use crate::config::TexConfig;
use crate::template::validate_template_name;

/// Render a template and compile it to a PDF file
pub fn compile(
    config: &TexConfig,
    template: &str,
    context_path: Option<&Path>,
    out: Option<PathBuf>,
) -> Result<()> {
    let compiler = TexCompiler::new(config.clone())?;
    let context = load_context(context_path)?;

    let pdf = compiler.compile_template(template, &context)?;

    let out = out.unwrap_or_else(|| default_output_path(template));
    std::fs::write(&out, &pdf)
        .with_context(|| format!("Failed to write output file '{}'", out.display()))?;

    info!(bytes = pdf.len(), out = %out.display(), "wrote PDF");
    println!("Wrote {} ({} bytes)", out.display(), pdf.len());
    Ok(())
}

/// Render a template and print the LaTeX source to stdout
pub fn render(config: &TexConfig, template: &str, context_path: Option<&Path>) -> Result<()> {
    let compiler = TexCompiler::new(config.clone())?;
    let context = load_context(context_path)?;

    let source = compiler.render_template(template, &context)?;
    print!("{source}");
    Ok(())
}

/// Check that a template name resolves in the configured search paths
pub fn check(config: &TexConfig, template: &str) -> Result<()> {
    let compiler = TexCompiler::new(config.clone())?;
    validate_template_name(compiler.engine(), template)?;
    println!("OK: {template}");
    Ok(())
}

/// Load a context mapping from a YAML or JSON file; empty context when absent
fn load_context(path: Option<&Path>) -> Result<Context> {
    let Some(path) = path else {
        return Ok(Context::new());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read context file '{}'", path.display()))?;

    let value: serde_json::Value = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&contents)
            .with_context(|| format!("Invalid JSON in '{}'", path.display()))?,
        _ => serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid YAML in '{}'", path.display()))?,
    };

    Context::from_serialize(value)
        .with_context(|| format!("Context file '{}' must contain a mapping", path.display()))
}

fn default_output_path(template: &str) -> PathBuf {
    let stem = Path::new(template)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "texput".to_string());
    PathBuf::from(stem).with_extension("pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path("invoices/monthly.tex"),
            PathBuf::from("monthly.pdf")
        );
        assert_eq!(default_output_path("plain.tex"), PathBuf::from("plain.pdf"));
    }

    #[test]
    fn test_load_context_missing_is_empty() {
        let context = load_context(None).unwrap();
        assert_eq!(context, Context::new());
    }

    #[test]
    fn test_load_context_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ctx.yaml");
        std::fs::write(&path, "name: Arjen\ncount: 3\n").unwrap();

        let context = load_context(Some(&path)).unwrap();
        let mut expected = Context::new();
        expected.insert("name", "Arjen");
        expected.insert("count", &3);
        assert_eq!(context, expected);
    }

    #[test]
    fn test_load_context_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ctx.json");
        std::fs::write(&path, r#"{"name": "Mats"}"#).unwrap();

        let context = load_context(Some(&path)).unwrap();
        let mut expected = Context::new();
        expected.insert("name", "Mats");
        assert_eq!(context, expected);
    }

    #[test]
    fn test_load_context_rejects_non_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ctx.yaml");
        std::fs::write(&path, "- just\n- a\n- list\n").unwrap();

        assert!(load_context(Some(&path)).is_err());
    }
}
