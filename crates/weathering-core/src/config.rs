//! Run configuration: exchange rates, initial reservoir contents and the
//! number of integration steps.
//!
//! Every field has a default matching the compiled-in constants of the
//! original coursework exercise, so `ModelConfig::default()` reproduces the
//! reference run and a partial TOML file only needs to name the values it
//! overrides.

use crate::errors::{WeatheringError, WeatheringResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Exchange rate constants for the two-box model.
///
/// All three are held fixed for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateParameters {
    /// Rate of carbon release from the rock reservoir to the atmosphere
    /// unit: 1 / step
    pub release_rate: FloatValue,
    /// Rate of carbon burial from the atmosphere back into rock
    /// unit: 1 / step
    pub burial_rate: FloatValue,
    /// Temperature response to the atmospheric carbon anomaly
    /// unit: degC / GtC
    pub temperature_sensitivity: FloatValue,
}

impl Default for RateParameters {
    fn default() -> Self {
        Self {
            release_rate: 0.01,
            burial_rate: 0.005,
            temperature_sensitivity: 0.02,
        }
    }
}

/// Reservoir contents and temperature at step 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialState {
    /// Carbon in the rock reservoir
    /// unit: GtC
    pub rock: FloatValue,
    /// Carbon in the atmosphere reservoir
    /// unit: GtC
    pub atmosphere: FloatValue,
    /// Global mean temperature
    /// unit: degC
    pub temperature: FloatValue,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            rock: 1000.0,
            atmosphere: 300.0,
            temperature: 15.0,
        }
    }
}

fn default_steps() -> usize {
    1000
}

/// Full configuration for a single model run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub parameters: RateParameters,
    #[serde(default)]
    pub initial: InitialState,
    /// Number of time steps in the produced trajectory, including step 0
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            parameters: RateParameters::default(),
            initial: InitialState::default(),
            steps: default_steps(),
        }
    }
}

impl ModelConfig {
    /// Parse a configuration from a TOML document.
    ///
    /// Missing sections or fields fall back to the reference defaults.
    pub fn from_toml(content: &str) -> WeatheringResult<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> WeatheringResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check that the configuration describes a solvable run.
    ///
    /// A zero step count and non-finite values are rejected. Rate magnitudes
    /// are not bounds-checked: divergent or oscillatory trajectories are
    /// valid output.
    pub fn validate(&self) -> WeatheringResult<()> {
        if self.steps == 0 {
            return Err(WeatheringError::InvalidStepCount(self.steps));
        }

        let scalars = [
            ("parameters.release_rate", self.parameters.release_rate),
            ("parameters.burial_rate", self.parameters.burial_rate),
            (
                "parameters.temperature_sensitivity",
                self.parameters.temperature_sensitivity,
            ),
            ("initial.rock", self.initial.rock),
            ("initial.atmosphere", self.initial.atmosphere),
            ("initial.temperature", self.initial.temperature),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(WeatheringError::NonFiniteParameter { name, value });
            }
        }

        Ok(())
    }
}
