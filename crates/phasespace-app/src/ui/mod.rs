//! UI components.

mod canvas;
mod controls;
mod phase_view;
mod toolbar;

pub use canvas::{to_color32, PainterCanvas};
pub use controls::render_control_panel;
pub use phase_view::render_phase_view;
pub use toolbar::render_toolbar;
