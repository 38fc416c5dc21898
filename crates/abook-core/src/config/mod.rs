use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_MAX_AGENT_DEPTH, ENV_PREFIX, ENV_SEPARATOR};
use crate::error::{CoreError, CoreResult};

#[cfg(test)]
mod tests;

/// vCard versions accepted in configuration.
const SUPPORTED_VERSIONS: [&str; 2] = ["2.1", "3.0"];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub vcard: VCardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VCardConfig {
    /// Version written by default when serializing ("2.1" or "3.0").
    pub version: String,
    /// Maximum nesting of AGENT cards followed while parsing.
    pub max_agent_depth: usize,
    /// Whether long lines are folded at 75 octets on output.
    pub fold_lines: bool,
}

impl VCardConfig {
    /// ## Summary
    /// Checks that the configured values are usable.
    ///
    /// ## Errors
    /// Returns an error if the version is not one of the supported vCard versions.
    pub fn validate(&self) -> CoreResult<()> {
        if SUPPORTED_VERSIONS.contains(&self.version.trim()) {
            Ok(())
        } else {
            Err(CoreError::UnsupportedVersion(self.version.clone()))
        }
    }
}

impl Default for VCardConfig {
    fn default() -> Self {
        Self {
            version: "3.0".to_string(),
            max_agent_depth: DEFAULT_MAX_AGENT_DEPTH,
            fold_lines: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `abook.toml` and `ABOOK__*`
    /// environment variables. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or validating
    /// the vCard section fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("vcard.version", "3.0")?
            .set_default("vcard.max_agent_depth", DEFAULT_MAX_AGENT_DEPTH as u64)?
            .set_default("vcard.fold_lines", true)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings
            .vcard
            .validate()
            .map_err(|e| CoreError::ConfigError(e.to_string()))?;

        tracing::debug!(
            version = %settings.vcard.version,
            max_agent_depth = settings.vcard.max_agent_depth,
            "Settings loaded"
        );

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and `abook.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
