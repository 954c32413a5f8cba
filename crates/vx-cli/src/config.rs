//! CLI configuration, loadable from TOML.

use serde::Deserialize;
use vx_interpreter::InterpreterConfig;

/// Top-level configuration for the CLI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Phrase tables and thresholds. Omitted sections keep the built-ins.
    #[serde(default)]
    pub interpreter: InterpreterConfig,
    /// How envelopes are written to stdout.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON instead of one object per line.
    #[serde(default)]
    pub pretty: bool,
    /// Don't emit envelopes for blank lines.
    #[serde(default = "default_skip_empty")]
    pub skip_empty: bool,
}

fn default_skip_empty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            skip_empty: default_skip_empty(),
        }
    }
}

impl CliConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
