//! Conservation and feedback properties of the two-box model.
//!
//! The linear exchange moves the same mass out of one reservoir as into the
//! other, so total carbon is invariant under the recurrence. Temperature is
//! a pure diagnostic of the atmospheric anomaly.

use approx::assert_relative_eq;
use weathering_core::config::{InitialState, ModelConfig, RateParameters};
use weathering_core::integrator::Integrator;

#[test]
fn total_carbon_is_conserved() {
    let config = ModelConfig::default();
    let total_initial = config.initial.rock + config.initial.atmosphere;

    let trajectory = Integrator::from_config(config).run().unwrap();

    for i in 0..trajectory.len() {
        let state = trajectory.state_at(i);
        assert_relative_eq!(
            state.rock + state.atmosphere,
            total_initial,
            max_relative = 1e-12
        );
    }
}

#[test]
fn temperature_tracks_the_atmospheric_anomaly() {
    let config = ModelConfig::default();
    let sensitivity = config.parameters.temperature_sensitivity;
    let initial = config.initial.clone();

    let trajectory = Integrator::from_config(config).run().unwrap();

    for i in 0..trajectory.len() {
        let state = trajectory.state_at(i);
        assert_relative_eq!(
            state.temperature - initial.temperature,
            sensitivity * (state.atmosphere - initial.atmosphere),
            epsilon = 1e-12
        );
    }
}

#[test]
fn reservoirs_approach_the_exchange_equilibrium() {
    // Fluxes balance where c1 * rock == c2 * atmosphere. With c1 = 2 * c2
    // and 1300 GtC in total, that is rock ~ 433.3, atmosphere ~ 866.7.
    let config = ModelConfig {
        steps: 5000,
        ..ModelConfig::default()
    };

    let last = Integrator::from_config(config).run().unwrap().last();

    assert_relative_eq!(last.rock, 1300.0 / 3.0, max_relative = 1e-6);
    assert_relative_eq!(last.atmosphere, 2600.0 / 3.0, max_relative = 1e-6);
}

#[test]
fn balanced_initial_fluxes_are_a_fixed_point() {
    let config = ModelConfig {
        parameters: RateParameters {
            release_rate: 0.01,
            burial_rate: 0.02,
            temperature_sensitivity: 0.02,
        },
        initial: InitialState {
            rock: 400.0,
            atmosphere: 200.0,
            temperature: 15.0,
        },
        steps: 100,
    };

    let trajectory = Integrator::from_config(config).run().unwrap();

    for i in 0..trajectory.len() {
        let state = trajectory.state_at(i);
        assert_relative_eq!(state.rock, 400.0, epsilon = 1e-9);
        assert_relative_eq!(state.atmosphere, 200.0, epsilon = 1e-9);
        assert_relative_eq!(state.temperature, 15.0, epsilon = 1e-9);
    }
}
