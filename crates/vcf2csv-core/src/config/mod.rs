use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::codec::TextCodec;
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_ENCODING_LABEL, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub conversion: ConversionConfig,
    pub logging: LoggingConfig,
}

/// How the CSV header is derived from the extracted rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderMode {
    /// Columns of the first record only; later keys outside it are dropped.
    #[default]
    FirstRecord,
    /// Every column seen in any record, in order of first appearance.
    Union,
}

impl HeaderMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstRecord => "first-record",
            Self::Union => "union",
        }
    }
}

impl fmt::Display for HeaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-record" | "first_record" | "first" => Ok(Self::FirstRecord),
            "union" => Ok(Self::Union),
            other => Err(CoreError::InvalidInput(format!(
                "unknown header mode: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    pub encoding: String,
    pub header_mode: HeaderMode,
}

impl ConversionConfig {
    /// ## Summary
    /// Resolves the configured encoding label.
    ///
    /// ## Errors
    /// Returns an error if the label does not name a usable encoding.
    pub fn codec(&self) -> CoreResult<TextCodec> {
        TextCodec::for_label(&self.encoding)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `config.toml` in the working directory and
    /// from environment variables. Environment variables take precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// ## Summary
    /// Same as [`Settings::load`] with an explicit TOML file path. A missing
    /// file is not an error.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Config::builder()
            .set_default("conversion.encoding", DEFAULT_ENCODING_LABEL)?
            .set_default("conversion.header_mode", HeaderMode::default().as_str())?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::from(path).required(false))
            // Env vars, e.g. VCF2CSV__CONVERSION__ENCODING=utf-8
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` file and
/// `config.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(?settings, "Settings loaded");
    Ok(settings)
}
