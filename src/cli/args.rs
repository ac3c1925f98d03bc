// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for texpress

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "texpress")]
#[command(about = "Render LaTeX templates and compile them to PDF")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template with a context and compile it to PDF
    Compile {
        #[arg(help = "Template name, relative to the template search paths")]
        template: String,

        #[arg(short = 'C', long, help = "Context file (YAML or JSON mapping)")]
        context: Option<PathBuf>,

        #[arg(short, long, help = "Output PDF path (default: <template stem>.pdf)")]
        out: Option<PathBuf>,

        #[arg(short, long, help = "Override the LaTeX interpreter")]
        interpreter: Option<String>,
    },

    /// Render a template with a context and print the LaTeX source
    Render {
        #[arg(help = "Template name, relative to the template search paths")]
        template: String,

        #[arg(short = 'C', long, help = "Context file (YAML or JSON mapping)")]
        context: Option<PathBuf>,
    },

    /// Check that a template name resolves without rendering it
    Check {
        #[arg(help = "Template name, relative to the template search paths")]
        template: String,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
