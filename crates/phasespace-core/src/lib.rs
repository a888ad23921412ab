//! phasespace - simple harmonic oscillators in physical and phase space
//!
//! Each oscillator moves along a line in a physical space panel while tracing
//! its (displacement, velocity) trajectory in a phase space panel.
//!
//! # Architecture
//!
//! - [`Oscillator`] evaluates its motion analytically from elapsed time and keeps
//!   a bounded [`Trajectory`] ring buffer of recent phase points.
//! - [`OscillatorRegistry`] holds the live oscillators in insertion order.
//! - [`Simulation`] owns the registry, frame timer and RNG; nothing is global.
//! - [`Renderer`] draws one frame onto any [`Canvas`] using [`map`] to place
//!   phase points in the right half of the surface.
//!
//! # Example
//!
//! ```
//! use phasespace_core::prelude::*;
//!
//! let mut sim = Simulation::new(VisualizerSettings {
//!     rng_seed: Some(1),
//!     ..Default::default()
//! })?;
//! sim.add_oscillator();
//!
//! let clock = ManualClock::new(0.25);
//! let mut canvas = RecordingCanvas::new(800.0, 600.0);
//! Renderer::new(sim.settings()).render_frame(&mut sim, &clock, &mut canvas);
//!
//! assert_eq!(sim.registry().len(), 1);
//! assert!(!canvas.commands().is_empty());
//! # Ok::<(), ConfigError>(())
//! ```

pub mod canvas;
pub mod clock;
pub mod mapping;
pub mod oscillator;
pub mod registry;
pub mod renderer;
pub mod simulation;
pub mod trajectory;

pub use canvas::{Anchor, Canvas, DrawCommand, RecordingCanvas, Stroke};
pub use clock::{Clock, FrameTimer, InstantClock, ManualClock};
pub use mapping::{map, Mapping};
pub use oscillator::{Oscillator, OscillatorParams};
pub use registry::{Detached, OscillatorId, OscillatorRegistry};
pub use renderer::{format_bound, PanelLayout, PhaseDomain, Renderer};
pub use simulation::Simulation;
pub use trajectory::{PhasePoint, Trajectory};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::canvas::{Anchor, Canvas, DrawCommand, RecordingCanvas, Stroke};
    pub use crate::clock::{Clock, FrameTimer, InstantClock, ManualClock};
    pub use crate::mapping::{map, Mapping};
    pub use crate::oscillator::{Oscillator, OscillatorParams};
    pub use crate::registry::{Detached, OscillatorId, OscillatorRegistry};
    pub use crate::renderer::{PanelLayout, PhaseDomain, Renderer};
    pub use crate::simulation::Simulation;
    pub use crate::trajectory::{PhasePoint, Trajectory};
    pub use phasespace_types::{ConfigError, ParamError, ParamKind, Rgb, VisualizerSettings};
}
