//! Application state - the simulation plus the controls bound to it.

use phasespace_core::{Canvas, Detached, InstantClock, OscillatorId, Renderer, Simulation};
use phasespace_types::{ConfigError, ParamKind, VisualizerSettings};

use super::{ControlAction, ControlPanel};

/// Application state
pub struct AppState {
    /// Oscillators, frame timer and RNG
    simulation: Simulation,

    /// Frame renderer configured from the settings
    renderer: Renderer,

    /// Time source for oscillator motion
    clock: InstantClock,

    /// Slider groups, one per oscillator
    controls: ControlPanel,
}

impl AppState {
    pub fn new(settings: VisualizerSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            renderer: Renderer::new(&settings),
            simulation: Simulation::new(settings)?,
            clock: InstantClock::new(),
            controls: ControlPanel::new(),
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlPanel {
        &mut self.controls
    }

    pub fn oscillator_count(&self) -> usize {
        self.simulation.registry().len()
    }

    /// Seconds between the two most recent frames
    pub fn frame_delta(&self) -> f64 {
        self.simulation.timer().delta()
    }

    pub fn add_oscillator(&mut self) -> OscillatorId {
        let id = self.simulation.add_oscillator();
        self.controls.attach(id);
        log::info!("Added {id} ({} total)", self.oscillator_count());
        id
    }

    pub fn remove_oscillator(&mut self, id: OscillatorId) {
        if let Some(detached) = self.simulation.remove_oscillator(id) {
            self.detach(detached);
        }
    }

    pub fn clear_oscillators(&mut self) {
        let detached = self.simulation.clear();
        log::info!("Cleared {} oscillators", detached.len());
        for d in detached {
            self.detach(d);
        }
    }

    pub fn set_param(&mut self, id: OscillatorId, kind: ParamKind, value: f64) {
        self.simulation.set_param(id, kind, value);
    }

    /// Apply a batch of UI actions in order
    pub fn apply(&mut self, actions: impl IntoIterator<Item = ControlAction>) {
        for action in actions {
            match action {
                ControlAction::Add => {
                    self.add_oscillator();
                }
                ControlAction::ClearAll => self.clear_oscillators(),
                ControlAction::Remove(id) => self.remove_oscillator(id),
                ControlAction::Set { id, kind, value } => self.set_param(id, kind, value),
            }
        }
    }

    /// Draw one frame at the current wall-clock time
    pub fn render_frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.renderer
            .render_frame(&mut self.simulation, &self.clock, canvas);
    }

    fn detach(&mut self, detached: Detached) {
        if !self.controls.detach(detached.id) {
            log::warn!("No controls bound to {}", detached.id);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        let simulation = Simulation::default();
        Self {
            renderer: Renderer::new(simulation.settings()),
            simulation,
            clock: InstantClock::new(),
            controls: ControlPanel::new(),
        }
    }
}
