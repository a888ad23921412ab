//! Ordered collection of live oscillators.

use std::fmt;

use phasespace_types::{ConfigError, VisualizerSettings};
use rand::Rng;

use crate::oscillator::{Oscillator, OscillatorParams};

/// Stable handle used to bind controls to an oscillator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OscillatorId(u64);

impl OscillatorId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OscillatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "osc-{}", self.0)
    }
}

/// Signal that an oscillator was removed and its controls must be torn down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detached {
    pub id: OscillatorId,
}

/// Live oscillators in insertion order
#[derive(Debug, Clone)]
pub struct OscillatorRegistry {
    oscillators: Vec<Oscillator>,
    next_id: u64,
    settings: VisualizerSettings,
}

impl OscillatorRegistry {
    /// Create an empty registry. Settings are validated up front because
    /// `add` samples from their ranges.
    pub fn new(settings: VisualizerSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self::with_valid_settings(settings))
    }

    fn with_valid_settings(settings: VisualizerSettings) -> Self {
        Self {
            oscillators: Vec::new(),
            next_id: 1,
            settings,
        }
    }

    /// Append an oscillator with randomized parameters
    pub fn add<R: Rng + ?Sized>(&mut self, rng: &mut R) -> OscillatorId {
        let params = OscillatorParams::random(rng, &self.settings);
        self.add_with(params)
    }

    /// Append an oscillator with explicit parameters
    pub fn add_with(&mut self, params: OscillatorParams) -> OscillatorId {
        let id = OscillatorId::new(self.next_id);
        self.next_id += 1;

        self.oscillators.push(Oscillator::new(
            id,
            params,
            self.settings.trajectory_capacity,
        ));
        log::debug!(
            "Added {id}: angle={:.2} amplitude={:.1} frequency={:.2} color={}",
            params.angle,
            params.amplitude,
            params.frequency,
            params.color.to_hex()
        );
        id
    }

    /// Remove one oscillator
    pub fn remove(&mut self, id: OscillatorId) -> Option<Detached> {
        let index = self.oscillators.iter().position(|o| o.id() == id)?;
        self.oscillators.remove(index);
        log::debug!("Removed {id}");
        Some(Detached { id })
    }

    /// Remove every oscillator, returning one detach signal per oscillator in order
    pub fn remove_all(&mut self) -> Vec<Detached> {
        let detached: Vec<_> = self
            .oscillators
            .drain(..)
            .map(|o| Detached { id: o.id() })
            .collect();
        log::debug!("Cleared {} oscillators", detached.len());
        detached
    }

    pub fn get(&self, id: OscillatorId) -> Option<&Oscillator> {
        self.oscillators.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: OscillatorId) -> Option<&mut Oscillator> {
        self.oscillators.iter_mut().find(|o| o.id() == id)
    }

    pub fn contains(&self, id: OscillatorId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Oscillator> {
        self.oscillators.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Oscillator> {
        self.oscillators.iter_mut()
    }

    /// Ids in insertion order
    pub fn ids(&self) -> Vec<OscillatorId> {
        self.oscillators.iter().map(Oscillator::id).collect()
    }

    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }

    /// Update every oscillator to time `t`
    pub fn update_all(&mut self, t: f64) {
        for osc in &mut self.oscillators {
            osc.update(t);
        }
    }

    pub fn settings(&self) -> &VisualizerSettings {
        &self.settings
    }
}

impl Default for OscillatorRegistry {
    fn default() -> Self {
        Self::with_valid_settings(VisualizerSettings::default())
    }
}

impl<'a> IntoIterator for &'a OscillatorRegistry {
    type Item = &'a Oscillator;
    type IntoIter = std::slice::Iter<'a, Oscillator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut OscillatorRegistry {
    type Item = &'a mut Oscillator;
    type IntoIter = std::slice::IterMut<'a, Oscillator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
