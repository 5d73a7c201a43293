//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration mapped onto a `colonia.toml` file. Every
//! section and every key is optional; missing values fall back to the
//! `Default` impls below.
//!
//! ## Example `colonia.toml`
//!
//! ```toml
//! [world]
//! side_length = 15.0
//! field_size = 15
//! field_intensity = 1.0
//! seed = 42
//!
//! [colony]
//! strategy = "c"
//! initial_colonies = 4
//!
//! [automaton]
//! initial_state = 0
//! terminal_state = 5
//!
//! [growth]
//! rule = "payoff"
//! rate = 1.0
//!
//! [run]
//! steps = 20
//! ```

use crate::error::{Result, SimError};
use crate::field::DEFAULT_SIDE_LENGTH;
use crate::growth::GrowthRuleKind;
use colonia_data::Strategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Growth field and random source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Logical side length `N` of the simulated extent `[-N/2, N/2)`.
    pub side_length: f64,
    /// Cells per side of the uniform field used when no matrix is supplied.
    pub field_size: usize,
    pub field_intensity: f64,
    /// Fixed seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            side_length: DEFAULT_SIDE_LENGTH,
            field_size: 15,
            field_intensity: 1.0,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColonyConfig {
    pub strategy: Strategy,
    pub initial_colonies: usize,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::C,
            initial_colonies: 4,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AutomatonConfig {
    pub initial_state: i32,
    pub terminal_state: i32,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            initial_state: 0,
            terminal_state: 5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GrowthConfig {
    pub rule: GrowthRuleKind,
    pub rate: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            rule: GrowthRuleKind::Payoff,
            rate: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub steps: u64,
    /// Log a full population report every this many steps; 0 disables it.
    pub report_every: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            report_every: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub colony: ColonyConfig,
    pub automaton: AutomatonConfig,
    pub growth: GrowthConfig,
    pub run: RunConfig,
}

impl SimConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(content)
            .map_err(|e| SimError::invalid_config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file missing, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(SimError::invalid_config(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| SimError::invalid_config(format!("failed to serialize config: {e}")))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.world.side_length.is_finite() || self.world.side_length <= 0.0 {
            return Err(SimError::invalid_config("world.side_length must be positive"));
        }
        if self.world.field_size == 0 {
            return Err(SimError::invalid_config("world.field_size must be at least 1"));
        }
        if !self.world.field_intensity.is_finite() || self.world.field_intensity < 0.0 {
            return Err(SimError::invalid_config(
                "world.field_intensity must be finite and non-negative",
            ));
        }
        if !self.growth.rate.is_finite() {
            return Err(SimError::invalid_config("growth.rate must be finite"));
        }
        Ok(())
    }
}
