//! Oscillator motion, trajectory bounds and reset semantics

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use phasespace_core::prelude::*;

fn oscillator(amplitude: f64, frequency: f64, phase_offset: f64, angle: f64) -> Oscillator {
    Oscillator::new(
        OscillatorId::new(1),
        OscillatorParams {
            angle,
            amplitude,
            frequency,
            phase_offset,
            color: Rgb::new(200, 100, 150),
        },
        500,
    )
}

// ============================================================================
// Analytic motion
// ============================================================================

#[test]
fn test_motion_matches_closed_form() {
    let amplitude = 73.0;
    let frequency = 0.37;
    let phase = 1.1;
    let omega = TAU * frequency;
    let mut osc = oscillator(amplitude, frequency, phase, 0.3);

    for i in 0..50 {
        let t = i as f64 * 0.173;
        osc.update(t);

        let expected_x = amplitude * (omega * t + phase).cos();
        let expected_v = -omega * amplitude * (omega * t + phase).sin();
        assert_relative_eq!(osc.displacement(), expected_x, epsilon = 1e-9);
        assert_relative_eq!(osc.velocity(), expected_v, epsilon = 1e-9);
        assert_relative_eq!(osc.displacement_at(t), expected_x, epsilon = 1e-9);
        assert_relative_eq!(osc.velocity_at(t), expected_v, epsilon = 1e-9);
    }
}

#[test]
fn test_end_to_end_quarter_period() {
    // frequency 0.5 Hz -> omega = pi, quarter period at t = 0.5
    let mut osc = oscillator(100.0, 0.5, 0.0, 0.0);

    osc.update(0.0);
    assert_relative_eq!(osc.displacement(), 100.0, epsilon = 1e-12);
    assert_abs_diff_eq!(osc.velocity(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(osc.position().x, 100.0, epsilon = 1e-12);
    assert_abs_diff_eq!(osc.position().y, 0.0, epsilon = 1e-12);

    osc.update(0.5);
    assert_abs_diff_eq!(osc.displacement(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(osc.velocity(), -PI * 100.0, epsilon = 1e-9);
    assert_relative_eq!(osc.velocity(), -314.159_265, epsilon = 1e-4);
}

#[test]
fn test_phase_points_lie_on_ellipse() {
    let amplitude = 120.0;
    let mut osc = oscillator(amplitude, 0.8, 0.4, 1.0);
    let omega = osc.angular_frequency();

    for i in 0..100 {
        osc.update(i as f64 * 0.05);
    }

    for p in osc.trajectory().iter() {
        let r = (p.displacement / amplitude).powi(2) + (p.velocity / (omega * amplitude)).powi(2);
        assert_relative_eq!(r, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_direction_for_cardinal_angles() {
    let mut osc = oscillator(100.0, 0.5, 0.0, 1.0);

    osc.set_angle(0.0);
    assert_relative_eq!(osc.direction().x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(osc.direction().y, 0.0, epsilon = 1e-12);

    osc.set_angle(FRAC_PI_2);
    assert_abs_diff_eq!(osc.direction().x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(osc.direction().y, 1.0, epsilon = 1e-12);

    assert_relative_eq!(osc.direction().norm(), 1.0, epsilon = 1e-12);
}

// ============================================================================
// Trajectory buffer
// ============================================================================

#[test]
fn test_trajectory_never_exceeds_capacity() {
    let mut osc = oscillator(100.0, 0.5, 0.0, 0.0);
    for i in 0..1200 {
        osc.update(i as f64 * 0.01);
        assert!(osc.trajectory().len() <= 500);
    }
    assert_eq!(osc.trajectory().len(), 500);
}

#[test]
fn test_oldest_point_evicted_after_501_updates() {
    let mut osc = oscillator(100.0, 0.5, 0.3, 0.0);
    let dt = 0.01;

    osc.update(0.0);
    let first = *osc.trajectory().first().unwrap();

    for i in 1..501 {
        osc.update(i as f64 * dt);
    }

    assert_eq!(osc.trajectory().len(), 500);
    let oldest = *osc.trajectory().first().unwrap();
    assert_ne!(oldest, first);

    // Oldest surviving sample is the second one recorded
    assert_relative_eq!(oldest.displacement, osc.displacement_at(dt), epsilon = 1e-9);
    assert_relative_eq!(oldest.velocity, osc.velocity_at(dt), epsilon = 1e-9);

    let newest = *osc.trajectory().last().unwrap();
    assert_relative_eq!(newest.displacement, osc.displacement(), epsilon = 1e-12);
}

// ============================================================================
// Parameter changes
// ============================================================================

#[test]
fn test_changed_flag_resets_trajectory() {
    let mut osc = oscillator(100.0, 0.5, 0.0, 0.0);
    for i in 0..10 {
        osc.update(i as f64 * 0.1);
    }
    assert_eq!(osc.trajectory().len(), 10);

    osc.mark_parameters_changed();
    osc.update(1.0);
    assert_eq!(osc.trajectory().len(), 1);
    assert!(!osc.parameters_changed());
}

#[test]
fn test_every_setter_resets_path() {
    for kind in ParamKind::ALL {
        let mut osc = oscillator(100.0, 0.5, 0.0, 0.0);
        for i in 0..5 {
            osc.update(i as f64 * 0.1);
        }

        let range = kind.range();
        osc.set_param(kind, (range.start() + range.end()) / 2.0);
        assert!(osc.parameters_changed(), "{kind} should flag a change");

        osc.update(0.6);
        assert_eq!(osc.trajectory().len(), 1, "{kind} should reset the path");
    }
}

#[test]
fn test_angular_frequency_consistent_after_update() {
    let mut osc = oscillator(100.0, 0.5, 0.0, 0.0);
    for (i, f) in [0.1, 0.75, 1.0, 0.33].into_iter().enumerate() {
        osc.set_frequency(f);
        osc.update(i as f64);
        assert_relative_eq!(osc.angular_frequency(), TAU * f, epsilon = 1e-12);
    }
}

#[test]
fn test_amplitude_change_scales_motion() {
    let mut osc = oscillator(100.0, 0.5, 0.0, 0.0);
    osc.update(0.0);
    assert_relative_eq!(osc.displacement(), 100.0, epsilon = 1e-12);

    osc.set_amplitude(40.0);
    osc.update(2.0);
    assert_relative_eq!(osc.displacement(), 40.0, epsilon = 1e-9);
    assert_eq!(osc.trajectory().len(), 1);
}
