//! Visualizer settings and configuration loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DEFAULT_TRAJECTORY_CAPACITY, MAX_AMPLITUDE, MIN_AMPLITUDE};

/// Environment variable naming an optional JSON settings file
pub const CONFIG_ENV_VAR: &str = "PHASESPACE_CONFIG";

/// Settings loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Closed interval of real values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Closed interval of 8-bit color channel values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
}

impl ChannelRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }
}

/// Visualizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// Phase points kept per oscillator
    pub trajectory_capacity: usize,

    /// Inset of the phase space plot from the surface edges (pixels)
    pub panel_margin: f64,

    /// Half length of the drawn line of oscillation (pixels)
    pub line_half_length: f64,

    /// Diameter of the physical space marker (pixels)
    pub marker_diameter: f64,

    /// Background gray level
    pub background_gray: u8,

    /// Stroke width for axes, lines and trajectories
    pub stroke_width: f64,

    /// Axis label font size
    pub label_size: f64,

    /// Amplitude range for newly added oscillators
    pub initial_amplitude: ValueRange,

    /// Per-channel range for randomly chosen oscillator colors
    pub color_channel: ChannelRange,

    /// Seed for reproducible oscillators; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            trajectory_capacity: DEFAULT_TRAJECTORY_CAPACITY,
            panel_margin: 40.0,
            line_half_length: 200.0,
            marker_diameter: 10.0,
            background_gray: 220,
            stroke_width: 1.0,
            label_size: 14.0,
            initial_amplitude: ValueRange::new(50.0, 150.0),
            color_channel: ChannelRange::new(100, 255),
            rng_seed: None,
        }
    }
}

impl VisualizerSettings {
    /// Parse and validate settings from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every field is usable by the renderer and the registry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trajectory_capacity == 0 {
            return Err(ConfigError::invalid("trajectory_capacity", "must be at least 1"));
        }

        let lengths = [
            ("panel_margin", self.panel_margin, true),
            ("line_half_length", self.line_half_length, false),
            ("marker_diameter", self.marker_diameter, false),
            ("stroke_width", self.stroke_width, false),
            ("label_size", self.label_size, false),
        ];
        for (field, value, zero_ok) in lengths {
            if !value.is_finite() || value < 0.0 || (!zero_ok && value == 0.0) {
                let bound = if zero_ok { "non-negative" } else { "positive" };
                return Err(ConfigError::invalid(
                    field,
                    format!("{value} is not a finite {bound} length"),
                ));
            }
        }

        let amp = self.initial_amplitude;
        if !(amp.min.is_finite() && amp.max.is_finite()) || amp.min > amp.max {
            return Err(ConfigError::invalid(
                "initial_amplitude",
                format!("[{}, {}] is not an ordered range", amp.min, amp.max),
            ));
        }
        if amp.min < MIN_AMPLITUDE || amp.max > MAX_AMPLITUDE {
            return Err(ConfigError::invalid(
                "initial_amplitude",
                format!("[{}, {}] exceeds [{MIN_AMPLITUDE}, {MAX_AMPLITUDE}]", amp.min, amp.max),
            ));
        }

        if self.color_channel.min > self.color_channel.max {
            return Err(ConfigError::invalid(
                "color_channel",
                format!(
                    "[{}, {}] is not an ordered range",
                    self.color_channel.min, self.color_channel.max
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = VisualizerSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.trajectory_capacity, 500);
        assert_eq!(settings.panel_margin, 40.0);
        assert_eq!(settings.background_gray, 220);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = VisualizerSettings {
            rng_seed: Some(7),
            trajectory_capacity: 64,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        let parsed = VisualizerSettings::from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = VisualizerSettings::from_json(r#"{ "panel_margin": 20.0 }"#).unwrap();
        assert_eq!(parsed.panel_margin, 20.0);
        assert_eq!(parsed.trajectory_capacity, 500);
        assert_eq!(parsed.rng_seed, None);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = VisualizerSettings::from_json(r#"{ "trajectory_capacity": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "trajectory_capacity",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let inverted = VisualizerSettings {
            initial_amplitude: ValueRange::new(150.0, 50.0),
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let too_wide = VisualizerSettings {
            initial_amplitude: ValueRange::new(5.0, 150.0),
            ..Default::default()
        };
        assert!(too_wide.validate().is_err());

        let colors = VisualizerSettings {
            color_channel: ChannelRange::new(200, 100),
            ..Default::default()
        };
        assert!(colors.validate().is_err());

        let negative = VisualizerSettings {
            marker_diameter: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = VisualizerSettings::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "rng_seed": 42, "label_size": 12.0 }}"#).unwrap();

        let settings = VisualizerSettings::load(file.path()).unwrap();
        assert_eq!(settings.rng_seed, Some(42));
        assert_eq!(settings.label_size, 12.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = VisualizerSettings::load("/nonexistent/phasespace.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
