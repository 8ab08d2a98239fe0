//! Storage for the produced time series.

use crate::FloatValue;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// The state of the model at a single time step.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepState {
    pub rock: FloatValue,
    pub atmosphere: FloatValue,
    pub temperature: FloatValue,
}

/// Time series of the three model variables over a run.
///
/// The three buffers are allocated once, sized to the step count, filled by
/// index from 0 upwards and never resized. All three always have the same
/// length; index 0 holds the initial state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    rock: Array1<FloatValue>,
    atmosphere: Array1<FloatValue>,
    temperature: Array1<FloatValue>,
}

impl Trajectory {
    /// Allocate a zero-filled trajectory holding `steps` values per variable.
    pub(crate) fn zeros(steps: usize) -> Self {
        Self {
            rock: Array1::zeros(steps),
            atmosphere: Array1::zeros(steps),
            temperature: Array1::zeros(steps),
        }
    }

    pub(crate) fn set(&mut self, step: usize, state: StepState) {
        self.rock[step] = state.rock;
        self.atmosphere[step] = state.atmosphere;
        self.temperature[step] = state.temperature;
    }

    /// Number of time steps, including the initial state.
    pub fn len(&self) -> usize {
        self.rock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rock.is_empty()
    }

    /// Carbon in the rock reservoir at each step
    /// unit: GtC
    pub fn rock(&self) -> &Array1<FloatValue> {
        &self.rock
    }

    /// Carbon in the atmosphere reservoir at each step
    /// unit: GtC
    pub fn atmosphere(&self) -> &Array1<FloatValue> {
        &self.atmosphere
    }

    /// Global mean temperature at each step
    /// unit: degC
    pub fn temperature(&self) -> &Array1<FloatValue> {
        &self.temperature
    }

    /// Step indices as floats, for use as a plot x-axis.
    pub fn step_indices(&self) -> Array1<FloatValue> {
        Array1::range(0.0, self.len() as FloatValue, 1.0)
    }

    pub fn state_at(&self, step: usize) -> StepState {
        StepState {
            rock: self.rock[step],
            atmosphere: self.atmosphere[step],
            temperature: self.temperature[step],
        }
    }

    pub fn last(&self) -> StepState {
        self.state_at(self.len() - 1)
    }
}
