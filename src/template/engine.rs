// ABOUTME: Main template engine implementation using Tera
// ABOUTME: Configures LaTeX-safe escaping, whitespace control and locale-aware filters

use tera::{Context, Tera};
use tracing::debug;

use super::error::{Result, TemplateError};
use super::escape::escape_tex;
use super::filters::{self, DateFilter, LocalizeFilter};
use super::locale::TexLocale;
use crate::config::TexConfig;

// Raw sources are registered under a .tex name so autoescaping applies to them too
const INLINE_TEMPLATE: &str = "__inline__.tex";

/// A configured Tera instance with LaTeX escaping and locale-aware filters.
///
/// Construction scans every configured template directory for `**/*.tex`;
/// the engine is immutable afterwards apart from one-off raw-source renders.
pub struct TemplateEngine {
    tera: Tera,
    locale: TexLocale,
}

impl TemplateEngine {
    /// Build an engine from process-wide settings
    pub fn new(config: &TexConfig) -> Result<Self> {
        let locale = TexLocale::from_tag(&config.locale)?;

        let mut tera = Tera::default();
        for dir in &config.template_dirs {
            let pattern = format!("{}/**/*.tex", dir.display());
            let loaded = Tera::new(&pattern).map_err(|e| TemplateError::Syntax(describe(&e)))?;
            tera.extend(&loaded)
                .map_err(|e| TemplateError::Syntax(describe(&e)))?;
        }

        tera.autoescape_on(vec![".tex"]);
        tera.set_escape_fn(escape_tex);
        tera.register_filter("localize", LocalizeFilter { locale });
        tera.register_filter("date", DateFilter { locale });
        tera.register_filter("linebreaks", filters::linebreaks);

        debug!(
            templates = tera.get_template_names().count(),
            ?locale,
            "template engine initialized"
        );

        Ok(Self { tera, locale })
    }

    /// Render a registered template by name with the given context
    pub fn render_template(&self, name: &str, context: &Context) -> Result<String> {
        self.tera.render(name, context).map_err(translate)
    }

    /// Render a raw template source string with the same filters and escaping
    pub fn render_source(&mut self, source: &str, context: &Context) -> Result<String> {
        self.tera
            .add_raw_template(INLINE_TEMPLATE, source)
            .map_err(|e| TemplateError::Syntax(describe(&e)))?;
        self.tera.render(INLINE_TEMPLATE, context).map_err(translate)
    }

    /// Check whether a template name resolves in the registry
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Names of all registered templates
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.tera.get_template_names()
    }

    pub fn locale(&self) -> TexLocale {
        self.locale
    }
}

fn translate(err: tera::Error) -> TemplateError {
    match &err.kind {
        tera::ErrorKind::TemplateNotFound(name) => TemplateError::NotFound(name.clone()),
        _ => TemplateError::Render(describe(&err)),
    }
}

// Tera's Display shows only the top-level message; walk the source chain
// so filter and parser causes survive into our error text.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
