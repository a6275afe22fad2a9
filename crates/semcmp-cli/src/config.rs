use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use semcmp::ParseOptions;

const CONFIG_FILE: &str = "semcmp.toml";

/// The semcmp configuration file structure (semcmp.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemcmpConfig {
    /// Parser settings
    pub parse: ParseConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Require a full major.minor.patch core
    pub strict: bool,
}

impl SemcmpConfig {
    /// Load configuration from semcmp.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Loading configuration from {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)?;
                let config: SemcmpConfig = toml::from_str(&content)?;
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Parser options, with a command-line override taking precedence
    pub fn parse_options(&self, strict_override: Option<bool>) -> ParseOptions {
        ParseOptions {
            strict: strict_override.unwrap_or(self.parse.strict),
        }
    }
}
