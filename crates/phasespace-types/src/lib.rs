//! Shared types for the phase space visualizer.
//!
//! This crate defines the plain data used across all phasespace components:
//! - Global display bounds for amplitude, frequency and the derived phase domains
//! - Parameter kinds exposed to the controls
//! - Colors
//! - Visualizer settings and configuration loading

mod color;
mod param;
mod settings;

pub use color::*;
pub use param::*;
pub use settings::*;

use std::f64::consts::TAU;

/// Lower bound of the amplitude slider
pub const MIN_AMPLITUDE: f64 = 10.0;

/// Upper bound of the amplitude slider
pub const MAX_AMPLITUDE: f64 = 200.0;

/// Lower bound of the frequency slider (Hz)
pub const MIN_FREQUENCY: f64 = 0.1;

/// Upper bound of the frequency slider (Hz)
pub const MAX_FREQUENCY: f64 = 1.0;

/// Smallest displacement shown on the phase space axes
pub const MIN_DISPLACEMENT: f64 = -MAX_AMPLITUDE;

/// Largest displacement shown on the phase space axes
pub const MAX_DISPLACEMENT: f64 = MAX_AMPLITUDE;

/// Angular frequency of the slowest oscillator (rad/s)
pub const MIN_ANGULAR_FREQUENCY: f64 = TAU * MIN_FREQUENCY;

/// Angular frequency of the fastest oscillator (rad/s)
pub const MAX_ANGULAR_FREQUENCY: f64 = TAU * MAX_FREQUENCY;

/// Largest speed any oscillator can reach
pub const MAX_VELOCITY: f64 = MAX_AMPLITUDE * MAX_ANGULAR_FREQUENCY;

/// Smallest (most negative) velocity shown on the phase space axes
pub const MIN_VELOCITY: f64 = -MAX_VELOCITY;

/// Default number of phase points kept per oscillator
pub const DEFAULT_TRAJECTORY_CAPACITY: usize = 500;
