use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which solver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Fast, any cube, long solutions
    #[default]
    LayerByLayer,
    /// Shortest solutions, only for cubes a few moves from solved
    Search,
}

/// Defaults read from the settings file. Command line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub scramble_length: usize,
    pub strategy: StrategyKind,
    /// The longest solution the search strategy looks for.
    pub search_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scramble_length: 20,
            strategy: StrategyKind::LayerByLayer,
            search_depth: 7,
        }
    }
}

impl Settings {
    /// Reads settings from a TOML file, or the defaults without one.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read the settings file {}", path.display()))?;
        toml::from_str(&text)
            .wrap_err_with(|| format!("Invalid settings in {}", path.display()))
    }
}
