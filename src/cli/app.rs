// ABOUTME: Main application orchestration for the texpress CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands};
use crate::config::TexConfig;

pub struct App {
    config: TexConfig,
}

impl App {
    /// Create a new application instance
    pub fn new(config: TexConfig) -> Self {
        Self { config }
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting texpress v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        match args.command {
            Commands::Compile {
                template,
                context,
                out,
                interpreter,
            } => {
                if let Some(interpreter) = interpreter {
                    self.config.interpreter = interpreter;
                }
                commands::compile(&self.config, &template, context.as_deref(), out)
            }
            Commands::Render { template, context } => {
                commands::render(&self.config, &template, context.as_deref())
            }
            Commands::Check { template } => commands::check(&self.config, &template),
        }
    }
}
