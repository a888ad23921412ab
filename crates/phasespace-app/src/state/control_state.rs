//! Control bindings - one slider group per live oscillator.

use phasespace_core::OscillatorId;
use phasespace_types::ParamKind;

/// User intent produced by the UI and applied to the simulation between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    /// Add a randomized oscillator
    Add,
    /// Remove every oscillator
    ClearAll,
    /// Remove a single oscillator
    Remove(OscillatorId),
    /// Slider edit
    Set {
        id: OscillatorId,
        kind: ParamKind,
        value: f64,
    },
}

/// Controls bound to one oscillator
#[derive(Debug, Clone, PartialEq)]
pub struct ControlGroup {
    pub id: OscillatorId,
    pub title: String,
    /// Whether the group is expanded in the side panel
    pub open: bool,
}

/// The set of control groups, in oscillator insertion order
#[derive(Debug, Default)]
pub struct ControlPanel {
    groups: Vec<ControlGroup>,
    created: usize,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the controls for a newly added oscillator
    pub fn attach(&mut self, id: OscillatorId) {
        if self.is_bound(id) {
            return;
        }
        self.created += 1;
        self.groups.push(ControlGroup {
            id,
            title: format!("Oscillator {}", self.created),
            open: true,
        });
    }

    /// Tear down the controls of a removed oscillator
    pub fn detach(&mut self, id: OscillatorId) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != id);
        before != self.groups.len()
    }

    pub fn is_bound(&self, id: OscillatorId) -> bool {
        self.groups.iter().any(|g| g.id == id)
    }

    pub fn groups(&self) -> &[ControlGroup] {
        &self.groups
    }

    pub fn group_mut(&mut self, id: OscillatorId) -> Option<&mut ControlGroup> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
