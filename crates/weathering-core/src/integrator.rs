//! Explicit Euler integration of the two-box weathering feedback model.
//!
//! The governing update, applied with a fixed unit time step, is
//!
//! $$ R_i = R_{i-1} - c_1 R_{i-1} + c_2 A_{i-1} $$
//! $$ A_i = A_{i-1} + c_1 R_{i-1} - c_2 A_{i-1} $$
//! $$ T_i = T_0 + c_3 (A_i - A_0) $$
//!
//! Where:
//! - $R$ is carbon in the rock reservoir (GtC)
//! - $A$ is carbon in the atmosphere reservoir (GtC)
//! - $T$ is global mean temperature (degC)
//! - $c_1$ is the release rate, $c_2$ the burial rate (1/step)
//! - $c_3$ is the temperature sensitivity (degC/GtC)
//!
//! Each step reads only the previous step's reservoir values; temperature is
//! diagnosed from the current atmospheric anomaly rather than integrated.
//! This reproduces the reference arithmetic exactly, including its
//! first-order coupling between the two reservoir updates.

use crate::config::ModelConfig;
use crate::errors::WeatheringResult;
use crate::trajectory::{StepState, Trajectory};

/// Evolves the model state over a fixed number of unit time steps.
///
/// Pure given its configuration: validation happens up front and the
/// integration itself cannot fail. Divergent trajectories from large rate
/// constants are valid output.
#[derive(Debug, Clone)]
pub struct Integrator {
    config: ModelConfig,
}

impl Integrator {
    pub fn from_config(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Run the model, producing one trajectory entry per time step.
    ///
    /// With `steps == 1` the trajectory is just the initial state.
    pub fn run(&self) -> WeatheringResult<Trajectory> {
        self.config.validate()?;

        let params = &self.config.parameters;
        let initial = &self.config.initial;
        let steps = self.config.steps;

        let mut trajectory = Trajectory::zeros(steps);
        trajectory.set(
            0,
            StepState {
                rock: initial.rock,
                atmosphere: initial.atmosphere,
                temperature: initial.temperature,
            },
        );

        for i in 1..steps {
            let prev = trajectory.state_at(i - 1);

            let release = params.release_rate * prev.rock;
            let burial = params.burial_rate * prev.atmosphere;

            let rock = prev.rock - release + burial;
            let atmosphere = prev.atmosphere + release - burial;
            let temperature = initial.temperature
                + params.temperature_sensitivity * (atmosphere - initial.atmosphere);

            trajectory.set(
                i,
                StepState {
                    rock,
                    atmosphere,
                    temperature,
                },
            );
        }

        let last = trajectory.last();
        log::debug!(
            "integrated {} steps: rock={:.3} GtC, atmosphere={:.3} GtC, temperature={:.3} degC",
            steps,
            last.rock,
            last.atmosphere,
            last.temperature
        );

        Ok(trajectory)
    }
}
