//! Observable properties of the quadrant state model, end to end.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

use pq_core::{PerUnit, QuadrantState, Radians, SignConvention};

const TOL: f64 = 1e-9;

/// Sweep of power angles that stays inside (-π, π].
fn phi_sweep() -> Vec<f64> {
    (0..64).map(|i| -PI + (i as f64 + 0.5) * (2.0 * PI / 64.0)).collect()
}

#[test]
fn power_triangle_identity() {
    // P² + Q² = S² for every reachable point on the circle.
    let mut state = QuadrantState::new();
    for phi in phi_sweep() {
        let (x, y) = (0.9 * phi.cos(), 0.9 * phi.sin());
        state.set_power_phasor(x, y).unwrap();

        let p = state.active_power().value();
        let q = state.reactive_power().value();
        let s = state.apparent_power().value();
        assert!((p * p + q * q - s * s).abs() < TOL, "phi = {phi}");
    }
}

#[test]
fn current_angle_identity() {
    let mut state = QuadrantState::new();
    state
        .set_voltage_phasor(PerUnit(0.8), Radians(0.3))
        .unwrap();

    for phi in phi_sweep() {
        state.set_power_phasor(phi.cos(), phi.sin()).unwrap();
        let expected = state.voltage_angle() - state.power_angle();
        assert!(
            (state.current_angle().value() - expected.value()).abs() < TOL,
            "phi = {phi}"
        );
    }
}

#[test]
fn recomputation_is_idempotent() {
    let mut state = QuadrantState::new();
    state.set_power_phasor(0.4, -0.7).unwrap();

    let before = state.clone();
    let rev_before = state.revision();

    state.refresh().unwrap();

    // Everything but the revision token is unchanged.
    assert_eq!(state.revision(), rev_before.wrapping_add(1));
    assert_eq!(state.power_phasor(), before.power_phasor());
    assert_eq!(state.current_phasor(), before.current_phasor());
    assert_eq!(state.power_factor(), before.power_factor());
    assert_eq!(state.waveforms(), before.waveforms());
}

#[test]
fn set_power_phasor_round_trip() {
    let mut state = QuadrantState::new();

    for (x, y) in [(0.3, 0.4), (-0.6, 0.1), (-0.2, -0.9), (1.2, -1.3)] {
        state.set_power_phasor(x, y).unwrap();
        let expected_s = f64::hypot(x, y).min(1.0);
        let expected_phi = f64::atan2(y, x);
        assert!((state.apparent_power().value() - expected_s).abs() < TOL);
        assert!((state.power_angle().value() - expected_phi).abs() < TOL);
    }
}

#[test]
fn waveform_decomposition_identity() {
    let mut state = QuadrantState::new();
    for phi in [-FRAC_PI_2, -FRAC_PI_3, 0.5, FRAC_PI_2] {
        state.set_power_phasor(phi.cos(), phi.sin()).unwrap();
        for sample in &state.waveforms().samples {
            assert!(
                (sample.active_current + sample.reactive_current - sample.current).abs() < TOL,
                "t = {:?}",
                sample.time
            );
        }
    }
}

#[test]
fn unity_power_factor_scenario() {
    // V = 1, I = 1, φ = 0.
    let mut state = QuadrantState::new();
    state.set_power_phasor(1.0, 0.0).unwrap();

    assert!((state.current_rms().value() - 1.0).abs() < TOL);
    assert!((state.active_power().value() - 1.0).abs() < TOL);
    assert!(state.reactive_power().value().abs() < TOL);

    // IEC gives the expected +1...
    state.set_sign_convention(SignConvention::Iec).unwrap();
    assert!((state.power_factor() - 1.0).abs() < TOL);

    // ...while EEI's -signum(sin φ) factor zeroes the PF at exactly
    // φ = 0. That discontinuity comes straight from the sign formula,
    // pinned here on purpose; do not "fix" it without changing the
    // formula everywhere.
    state.set_sign_convention(SignConvention::Eei).unwrap();
    assert_eq!(state.power_factor(), 0.0);
}

#[test]
fn quadrature_scenario() {
    // φ = π/2: all power is reactive, PF ≈ 0 under both conventions.
    let mut state = QuadrantState::new();
    state.set_power_phasor(0.0, 1.0).unwrap();

    assert!((state.power_angle().value() - FRAC_PI_2).abs() < TOL);
    assert!(state.active_power().value().abs() < TOL);
    assert!((state.reactive_power().value() - state.apparent_power().value()).abs() < TOL);

    assert!(state.power_factor().abs() < TOL);
    state.set_sign_convention(SignConvention::Iec).unwrap();
    assert!(state.power_factor().abs() < TOL);
}

#[test]
fn drag_to_cardinal_points() {
    let mut state = QuadrantState::new();

    state.set_power_phasor(1.0, 0.0).unwrap();
    assert!(state.power_angle().value().abs() < TOL);
    assert!((state.apparent_power().value() - 1.0).abs() < TOL);

    state.set_power_phasor(0.0, -1.0).unwrap();
    assert!((state.power_angle().value() + FRAC_PI_2).abs() < TOL);
    assert!((state.apparent_power().value() - 1.0).abs() < TOL);
}

#[test]
fn zero_voltage_is_rejected_without_corruption() {
    let mut state = QuadrantState::new();
    state.set_power_phasor(0.6, 0.3).unwrap();
    let snapshot = state.clone();

    assert!(state.set_voltage_phasor(PerUnit(0.0), Radians(0.0)).is_err());
    assert_eq!(state, snapshot);

    // Still fully usable afterwards.
    state.set_power_phasor(0.5, 0.5).unwrap();
    assert_eq!(state.revision(), snapshot.revision().wrapping_add(1));
}
