//! Oscillator parameters exposed to the controls.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{MAX_AMPLITUDE, MAX_FREQUENCY, MIN_AMPLITUDE, MIN_FREQUENCY};

/// Tunable oscillator parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// Direction of motion in physical space (radians)
    Angle,
    /// Displacement bound
    Amplitude,
    /// Oscillation frequency (Hz)
    Frequency,
}

impl ParamKind {
    /// All parameters in control order
    pub const ALL: [ParamKind; 3] = [ParamKind::Angle, ParamKind::Amplitude, ParamKind::Frequency];

    pub fn label(&self) -> &'static str {
        match self {
            ParamKind::Angle => "Angle",
            ParamKind::Amplitude => "Amplitude",
            ParamKind::Frequency => "Frequency",
        }
    }

    /// Accepted values, inclusive on both ends
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            ParamKind::Angle => 0.0..=TAU,
            ParamKind::Amplitude => MIN_AMPLITUDE..=MAX_AMPLITUDE,
            ParamKind::Frequency => MIN_FREQUENCY..=MAX_FREQUENCY,
        }
    }

    /// Slider increment
    pub fn step(&self) -> f64 {
        match self {
            ParamKind::Angle => 0.01,
            ParamKind::Amplitude => 1.0,
            ParamKind::Frequency => 0.01,
        }
    }

    /// Clamp a value into the parameter range. NaN maps to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        let range = self.range();
        if value.is_nan() {
            return *range.start();
        }
        value.clamp(*range.start(), *range.end())
    }

    /// Check a value against the parameter range without clamping
    pub fn validate(&self, value: f64) -> Result<f64, ParamError> {
        if !value.is_finite() {
            return Err(ParamError::NotFinite { kind: *self, value });
        }
        let range = self.range();
        if !range.contains(&value) {
            return Err(ParamError::OutOfRange {
                kind: *self,
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(value)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected parameter assignment
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("{kind} value {value} outside [{min}, {max}]")]
    OutOfRange {
        kind: ParamKind,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{kind} value {value} is not finite")]
    NotFinite { kind: ParamKind, value: f64 },
}
