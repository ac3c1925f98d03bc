// ABOUTME: Compilation module tying template rendering to the LaTeX toolchain
// ABOUTME: Exposes the TexCompiler entry points for source and template compilation

pub mod error;
pub mod job;

pub use error::{CompileError, Result};
pub use job::CompileJob;

use tera::Context;
use tracing::info;

use crate::config::TexConfig;
use crate::template::{self, TemplateEngine};

/// High-level entry point: a configured template engine plus the compile
/// cycle. Rendering is pure and deterministic; each compile call owns its
/// own scoped working directory.
pub struct TexCompiler {
    config: TexConfig,
    engine: TemplateEngine,
}

impl TexCompiler {
    pub fn new(config: TexConfig) -> Result<Self> {
        let engine = TemplateEngine::new(&config)?;
        Ok(Self { config, engine })
    }

    /// Render a registered template with the given context
    pub fn render_template(&self, name: &str, context: &Context) -> template::Result<String> {
        self.engine.render_template(name, context)
    }

    /// Render a raw template source string with the given context
    pub fn render_source(&mut self, source: &str, context: &Context) -> template::Result<String> {
        self.engine.render_source(source, context)
    }

    /// Compile already-rendered LaTeX source to PDF bytes
    pub fn compile_source(&self, source: &str) -> Result<Vec<u8>> {
        let job = CompileJob::new(&self.config.interpreter)?;
        let artifact = job.run(source)?;
        info!(bytes = artifact.len(), "compilation finished");
        Ok(artifact)
    }

    /// Render a template with the given context and compile it to PDF bytes
    pub fn compile_template(&self, name: &str, context: &Context) -> Result<Vec<u8>> {
        let source = self.engine.render_template(name, context)?;
        self.compile_source(&source)
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    pub fn config(&self) -> &TexConfig {
        &self.config
    }
}
