//! Startup configuration.

use std::path::Path;

use phasespace_types::{VisualizerSettings, CONFIG_ENV_VAR};

/// Settings from the file named by `PHASESPACE_CONFIG`, or defaults.
///
/// A missing or invalid file is logged and falls back to the defaults.
pub fn load_settings() -> VisualizerSettings {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => load_settings_from(Path::new(&path)),
        None => VisualizerSettings::default(),
    }
}

/// Settings from `path`, falling back to the defaults on error
pub fn load_settings_from(path: &Path) -> VisualizerSettings {
    match VisualizerSettings::load(path) {
        Ok(settings) => {
            log::info!("Loaded settings from {}", path.display());
            settings
        }
        Err(err) => {
            log::warn!("{err} ({}); using default settings", path.display());
            VisualizerSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = load_settings_from(Path::new("/nonexistent/phasespace.json"));
        assert_eq!(settings, VisualizerSettings::default());
    }
}
