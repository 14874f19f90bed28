use anyhow::Result;
use serde::Deserialize;
use skillsmith_docs::DocsOptions;
use std::env;
use std::path::{Path, PathBuf};

/// Built-in defaults, the lowest configuration layer
const DEFAULT_CONFIG: &str = r#"
[skills]
root = "skills"  # Set via SKILLSMITH_ROOT env var

[logging]
level = "info"  # trace, debug, info, warn, error

[docs]
author = "Tyler-R-Kendrick"
license = "MIT"
date = "February 2026"
install_source = "Tyler-R-Kendrick/agent-skills/skills"

[audit]
bottom = 60
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct SkillsConfig {
    pub root: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuditConfig {
    /// Rows in the lowest-scores table
    pub bottom: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub skills: SkillsConfig,
    pub logging: LoggingConfig,
    pub docs: DocsOptions,
    pub audit: AuditConfig,
}

impl Config {
    /// Get the global config path: ~/.skillsmith/skillsmith.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".skillsmith").join("skillsmith.toml"))
    }

    fn defaults() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
    }

    /// Defaults, then the global file, then the explicit or local file
    fn file_layers(
        global: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        let mut config_builder = Self::defaults();

        // Layer 2: Global config
        if let Some(global) = global {
            config_builder = config_builder.add_source(config::File::from(global).required(false));
        }

        // Layer 3: Explicit or local workspace config
        match config_file {
            Some(path) => config_builder.add_source(config::File::from(path)),
            None => config_builder.add_source(config::File::with_name("skillsmith").required(false)),
        }
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Global config: ~/.skillsmith/skillsmith.toml (optional)
    /// 3. `config_file` when given (required), else ./skillsmith.toml (optional)
    /// 4. Environment variables (highest priority)
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = Self::file_layers(Self::global_config_path(), config_file);

        // Layer 4: Environment variables with SKILLSMITH__ prefix
        config_builder = config_builder
            .add_source(config::Environment::with_prefix("SKILLSMITH").separator("__"));

        // Layer 5: Convenience env var overrides
        if let Ok(root) = env::var("SKILLSMITH_ROOT") {
            config_builder = config_builder.set_override("skills.root", root)?;
        }

        if let Ok(level) = env::var("SKILLSMITH_LOG_LEVEL") {
            config_builder = config_builder.set_override("logging.level", level)?;
        }

        let config: Self = config_builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Apply command-line flags, the highest priority layer
    pub fn apply_flags(&mut self, root: Option<PathBuf>, log_level: Option<String>) {
        if let Some(root) = root {
            self.skills.root = root;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }
    }
}
