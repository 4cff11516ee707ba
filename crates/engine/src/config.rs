use serde::Deserialize;

use crate::error::RollupError;
use crate::filter::IgnoreFilter;

/// Run configuration, supplied fresh per run.
///
/// ```toml
/// name = "Weekly All-Hands"
///
/// [ignore]
/// patterns = ["observer", "recording bot"]
///
/// [output]
/// json = "rollup.json"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct RollupConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ignore: IgnoreConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct IgnoreConfig {
    /// Case-insensitive patterns matched against participant names, in order.
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Write the JSON result to this path after a run.
    #[serde(default)]
    pub json: Option<String>,
}

impl RollupConfig {
    pub fn from_toml(input: &str) -> Result<Self, RollupError> {
        let config: RollupConfig =
            toml::from_str(input).map_err(|e| RollupError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Compile ignore patterns so a bad pattern fails before any rows are
    /// processed.
    pub fn validate(&self) -> Result<(), RollupError> {
        IgnoreFilter::compile(&self.ignore.patterns).map(|_| ())
    }
}
