//! Simple harmonic oscillator with analytic motion and a bounded phase trajectory.

use std::f64::consts::TAU;

use nalgebra::{Unit, Vector2};
use phasespace_types::{ParamError, ParamKind, Rgb, VisualizerSettings};
use rand::Rng;

use crate::registry::OscillatorId;
use crate::trajectory::{PhasePoint, Trajectory};

/// Initial parameters of an oscillator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorParams {
    /// Direction of motion (radians)
    pub angle: f64,
    pub amplitude: f64,
    /// Frequency (Hz)
    pub frequency: f64,
    /// Phase at t = 0 (radians)
    pub phase_offset: f64,
    pub color: Rgb,
}

impl OscillatorParams {
    /// Draw random parameters within the configured spawn ranges
    pub fn random<R: Rng + ?Sized>(rng: &mut R, settings: &VisualizerSettings) -> Self {
        let amp = settings.initial_amplitude;
        let freq = ParamKind::Frequency.range();
        let ch = settings.color_channel;
        let mut channel = || rng.gen_range(ch.min..=ch.max);
        let color = Rgb::new(channel(), channel(), channel());

        Self {
            angle: rng.gen_range(0.0..TAU),
            amplitude: rng.gen_range(amp.min..=amp.max),
            frequency: rng.gen_range(freq),
            phase_offset: rng.gen_range(0.0..TAU),
            color,
        }
    }
}

impl Default for OscillatorParams {
    fn default() -> Self {
        Self {
            angle: 0.0,
            amplitude: 100.0,
            frequency: 0.5,
            phase_offset: 0.0,
            color: Rgb::BLACK,
        }
    }
}

/// A simple harmonic oscillator moving along a line.
///
/// Motion is evaluated in closed form from elapsed time, so there is no
/// integration drift:
///
/// - `x(t) = A cos(ωt + φ)`
/// - `v(t) = -ωA sin(ωt + φ)`
///
/// Parameter setters only record the change; the next [`update`](Self::update)
/// clears the trajectory and recomputes `ω`, so a path never mixes dynamics from
/// before and after an edit.
#[derive(Debug, Clone)]
pub struct Oscillator {
    id: OscillatorId,
    angle: f64,
    amplitude: f64,
    frequency: f64,
    angular_frequency: f64,
    phase_offset: f64,
    direction: Unit<Vector2<f64>>,
    displacement: f64,
    velocity: f64,
    position: Vector2<f64>,
    trajectory: Trajectory,
    parameters_changed: bool,
    color: Rgb,
}

impl Oscillator {
    pub fn new(id: OscillatorId, params: OscillatorParams, trajectory_capacity: usize) -> Self {
        let angle = normalize_angle(params.angle);
        let amplitude = ParamKind::Amplitude.clamp(params.amplitude);
        let frequency = ParamKind::Frequency.clamp(params.frequency);

        Self {
            id,
            angle,
            amplitude,
            frequency,
            angular_frequency: TAU * frequency,
            phase_offset: params.phase_offset,
            direction: direction_from_angle(angle),
            displacement: 0.0,
            velocity: 0.0,
            position: Vector2::zeros(),
            trajectory: Trajectory::new(trajectory_capacity),
            parameters_changed: false,
            color: params.color,
        }
    }

    pub fn id(&self) -> OscillatorId {
        self.id
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Angular frequency used by the most recent update (rad/s)
    pub fn angular_frequency(&self) -> f64 {
        self.angular_frequency
    }

    pub fn phase_offset(&self) -> f64 {
        self.phase_offset
    }

    /// Unit vector along the line of motion
    pub fn direction(&self) -> Unit<Vector2<f64>> {
        self.direction
    }

    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Physical space position relative to the line center
    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Whether an edit is waiting to be applied by the next update
    pub fn parameters_changed(&self) -> bool {
        self.parameters_changed
    }

    /// Request a trajectory reset on the next update
    pub fn mark_parameters_changed(&mut self) {
        self.parameters_changed = true;
    }

    /// Displacement at time `t` with the current angular frequency
    pub fn displacement_at(&self, t: f64) -> f64 {
        self.amplitude * (self.angular_frequency * t + self.phase_offset).cos()
    }

    /// Velocity at time `t` with the current angular frequency
    pub fn velocity_at(&self, t: f64) -> f64 {
        let phase = self.angular_frequency * t + self.phase_offset;
        -self.angular_frequency * self.amplitude * phase.sin()
    }

    /// Advance derived state to time `t` and record the phase point
    pub fn update(&mut self, t: f64) {
        if self.parameters_changed {
            self.trajectory.clear();
            self.angular_frequency = TAU * self.frequency;
            self.parameters_changed = false;
        }

        self.displacement = self.displacement_at(t);
        self.velocity = self.velocity_at(t);
        self.position = self.direction.into_inner() * self.displacement;

        self.trajectory
            .push(PhasePoint::new(self.displacement, self.velocity));
    }

    /// Set the direction of motion. The direction vector is updated immediately.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = normalize_angle(angle);
        self.direction = direction_from_angle(self.angle);
        self.parameters_changed = true;
    }

    /// Set the amplitude, clamped to the slider range
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = ParamKind::Amplitude.clamp(amplitude);
        self.parameters_changed = true;
    }

    /// Set the frequency, clamped to the slider range. Angular frequency follows
    /// on the next update.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = ParamKind::Frequency.clamp(frequency);
        self.parameters_changed = true;
    }

    /// Current value of a tunable parameter
    pub fn param(&self, kind: ParamKind) -> f64 {
        match kind {
            ParamKind::Angle => self.angle,
            ParamKind::Amplitude => self.amplitude,
            ParamKind::Frequency => self.frequency,
        }
    }

    /// Set a tunable parameter through its setter, clamping into range
    pub fn set_param(&mut self, kind: ParamKind, value: f64) {
        match kind {
            ParamKind::Angle => self.set_angle(ParamKind::Angle.clamp(value)),
            ParamKind::Amplitude => self.set_amplitude(value),
            ParamKind::Frequency => self.set_frequency(value),
        }
    }

    /// Set a tunable parameter, rejecting out-of-range values instead of clamping
    pub fn try_set_param(&mut self, kind: ParamKind, value: f64) -> Result<(), ParamError> {
        let value = kind.validate(value)?;
        self.set_param(kind, value);
        Ok(())
    }
}

/// Wrap an angle into `[0, 2π)`
fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

fn direction_from_angle(angle: f64) -> Unit<Vector2<f64>> {
    Unit::new_normalize(Vector2::new(angle.cos(), angle.sin()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn oscillator(params: OscillatorParams) -> Oscillator {
        Oscillator::new(OscillatorId::new(1), params, 500)
    }

    #[test]
    fn test_new_derives_state() {
        let osc = oscillator(OscillatorParams {
            angle: FRAC_PI_2,
            frequency: 0.25,
            ..Default::default()
        });
        assert_relative_eq!(osc.angular_frequency(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(osc.direction().x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(osc.direction().y, 1.0, epsilon = 1e-12);
        assert!(osc.trajectory().is_empty());
        assert!(!osc.parameters_changed());
    }

    #[test]
    fn test_new_clamps_params() {
        let osc = oscillator(OscillatorParams {
            amplitude: 1000.0,
            frequency: 0.0,
            angle: -FRAC_PI_2,
            ..Default::default()
        });
        assert_eq!(osc.amplitude(), 200.0);
        assert_eq!(osc.frequency(), 0.1);
        assert_relative_eq!(osc.angle(), 3.0 * FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_position_follows_direction() {
        let mut osc = oscillator(OscillatorParams {
            angle: PI / 4.0,
            ..Default::default()
        });
        osc.update(0.0);
        let expected = 100.0 / 2.0_f64.sqrt();
        assert_relative_eq!(osc.position().x, expected, epsilon = 1e-9);
        assert_relative_eq!(osc.position().y, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_updates_direction_immediately() {
        let mut osc = oscillator(OscillatorParams::default());
        osc.set_angle(PI);
        assert_relative_eq!(osc.direction().x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(osc.direction().y, 0.0, epsilon = 1e-12);
        assert!(osc.parameters_changed());
    }

    #[test]
    fn test_angle_at_full_turn_wraps() {
        let mut osc = oscillator(OscillatorParams::default());
        osc.set_param(ParamKind::Angle, TAU);
        assert_eq!(osc.angle(), 0.0);
    }

    #[test]
    fn test_frequency_is_lazy() {
        let mut osc = oscillator(OscillatorParams::default());
        osc.set_frequency(1.0);
        assert_relative_eq!(osc.angular_frequency(), PI, epsilon = 1e-12);

        osc.update(0.0);
        assert_relative_eq!(osc.angular_frequency(), TAU, epsilon = 1e-12);
        assert!(!osc.parameters_changed());
    }

    #[test]
    fn test_param_dispatch() {
        let mut osc = oscillator(OscillatorParams::default());
        for kind in ParamKind::ALL {
            let value = *kind.range().end() * 0.5;
            osc.set_param(kind, value);
            assert_relative_eq!(osc.param(kind), value, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_try_set_rejects_out_of_range() {
        let mut osc = oscillator(OscillatorParams::default());
        let err = osc.try_set_param(ParamKind::Frequency, 2.0).unwrap_err();
        assert!(matches!(err, ParamError::OutOfRange { .. }));
        assert_eq!(osc.frequency(), 0.5);
        assert!(!osc.parameters_changed());

        osc.try_set_param(ParamKind::Frequency, 0.8).unwrap();
        assert_eq!(osc.frequency(), 0.8);
        assert!(osc.parameters_changed());
    }

    #[test]
    fn test_random_params_within_ranges() {
        let settings = VisualizerSettings::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let p = OscillatorParams::random(&mut rng, &settings);
            assert!((0.0..TAU).contains(&p.angle));
            assert!((50.0..=150.0).contains(&p.amplitude));
            assert!((0.1..=1.0).contains(&p.frequency));
            assert!((0.0..TAU).contains(&p.phase_offset));
            for c in [p.color.r, p.color.g, p.color.b] {
                assert!(c >= 100);
            }
        }
    }
}
