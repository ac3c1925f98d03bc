// ABOUTME: Configuration management for the texpress library and CLI
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process-wide settings for rendering and compilation.
///
/// Built once and treated as immutable afterwards; every compiler and
/// template engine instance is constructed from an explicit `TexConfig`
/// rather than ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TexConfig {
    /// Name (or path) of the LaTeX interpreter to invoke.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Locale tag driving the `localize` and `date` filters ("en", "de", "fr").
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Directories scanned for `**/*.tex` templates.
    #[serde(default = "default_template_dirs")]
    pub template_dirs: Vec<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_interpreter() -> String {
    "lualatex".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_template_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("templates")]
}

impl Default for TexConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            locale: default_locale(),
            template_dirs: default_template_dirs(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl TexConfig {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: TexConfig = serde_yaml::from_str(&contents)?;
            config.merge_env();
            Ok(config)
        } else {
            let mut config = TexConfig::default();
            config.merge_env();
            Ok(config)
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Result<PathBuf> {
        let possible_paths = vec![
            PathBuf::from("texpress.yaml"),
            PathBuf::from("texpress.yml"),
            PathBuf::from(".texpress.yaml"),
            PathBuf::from(".texpress.yml"),
        ];

        // Check home directory
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".texpress").join("config.yaml");
            if home_config.exists() {
                return Ok(home_config);
            }
        }

        // Check current directory
        for path in possible_paths {
            if path.exists() {
                return Ok(path);
            }
        }

        // Return default path (may not exist)
        Ok(PathBuf::from("texpress.yaml"))
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(interpreter) = std::env::var("TEXPRESS_INTERPRETER") {
            self.interpreter = interpreter;
        }
        if let Ok(locale) = std::env::var("TEXPRESS_LOCALE") {
            self.locale = locale;
        }
        if let Ok(dirs) = std::env::var("TEXPRESS_TEMPLATE_DIRS") {
            self.template_dirs = std::env::split_paths(&dirs).collect();
        }
        if let Ok(level) = std::env::var("TEXPRESS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("TEXPRESS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Replace the template search paths, returning the updated config
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dirs = vec![dir.into()];
        self
    }

    /// Replace the interpreter, returning the updated config
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Replace the locale tag, returning the updated config
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}
