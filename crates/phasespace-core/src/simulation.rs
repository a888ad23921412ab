//! Simulation state owned by the host and passed into each frame.

use phasespace_types::{ConfigError, ParamKind, VisualizerSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::FrameTimer;
use crate::oscillator::OscillatorParams;
use crate::registry::{Detached, OscillatorId, OscillatorRegistry};

/// Registry, frame timing and randomness for one visualizer session
pub struct Simulation {
    registry: OscillatorRegistry,
    timer: FrameTimer,
    rng: StdRng,
    settings: VisualizerSettings,
}

impl Simulation {
    /// Start a session, rejecting settings that fail `validate()`
    pub fn new(settings: VisualizerSettings) -> Result<Self, ConfigError> {
        let registry = OscillatorRegistry::new(settings.clone())?;
        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            registry,
            timer: FrameTimer::new(),
            rng,
            settings,
        })
    }

    pub fn settings(&self) -> &VisualizerSettings {
        &self.settings
    }

    pub fn registry(&self) -> &OscillatorRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut OscillatorRegistry {
        &mut self.registry
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Add an oscillator with random parameters
    pub fn add_oscillator(&mut self) -> OscillatorId {
        self.registry.add(&mut self.rng)
    }

    /// Add an oscillator with explicit parameters
    pub fn add_oscillator_with(&mut self, params: OscillatorParams) -> OscillatorId {
        self.registry.add_with(params)
    }

    pub fn remove_oscillator(&mut self, id: OscillatorId) -> Option<Detached> {
        self.registry.remove(id)
    }

    /// Remove all oscillators
    pub fn clear(&mut self) -> Vec<Detached> {
        self.registry.remove_all()
    }

    /// Apply a control edit. Returns false when the oscillator no longer exists.
    pub fn set_param(&mut self, id: OscillatorId, kind: ParamKind, value: f64) -> bool {
        match self.registry.get_mut(id) {
            Some(osc) => {
                osc.set_param(kind, value);
                log::debug!("{id}: {kind} = {value:.3}");
                true
            }
            None => {
                log::warn!("Ignoring {kind} edit for missing {id}");
                false
            }
        }
    }

    /// Record a frame at `now`, returning the delta since the previous frame
    pub fn begin_frame(&mut self, now: f64) -> f64 {
        self.timer.tick(now)
    }

    /// Advance a whole frame without drawing
    pub fn step(&mut self, now: f64) {
        self.begin_frame(now);
        self.registry.update_all(now);
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            registry: OscillatorRegistry::default(),
            timer: FrameTimer::new(),
            rng: StdRng::from_entropy(),
            settings: VisualizerSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasespace_types::ChannelRange;

    #[test]
    fn test_seeded_simulations_agree() {
        let settings = VisualizerSettings {
            rng_seed: Some(99),
            ..Default::default()
        };
        let mut a = Simulation::new(settings.clone()).unwrap();
        let mut b = Simulation::new(settings).unwrap();

        let ia = a.add_oscillator();
        let ib = b.add_oscillator();

        let oa = a.registry().get(ia).unwrap();
        let ob = b.registry().get(ib).unwrap();
        assert_eq!(oa.amplitude(), ob.amplitude());
        assert_eq!(oa.phase_offset(), ob.phase_offset());
        assert_eq!(oa.color(), ob.color());
    }

    #[test]
    fn test_set_param_on_missing_oscillator() {
        let mut sim = Simulation::default();
        let id = sim.add_oscillator();
        sim.clear();
        assert!(!sim.set_param(id, ParamKind::Amplitude, 20.0));
    }

    #[test]
    fn test_step_updates_timer_and_oscillators() {
        let mut sim = Simulation::default();
        let id = sim.add_oscillator();

        sim.step(0.1);
        sim.step(0.3);

        assert_eq!(sim.timer().frame_count(), 2);
        assert!((sim.timer().delta() - 0.2).abs() < 1e-12);
        assert_eq!(sim.registry().get(id).unwrap().trajectory().len(), 2);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = VisualizerSettings {
            color_channel: ChannelRange::new(200, 100),
            ..Default::default()
        };
        assert!(Simulation::new(settings).is_err());
    }
}
