//! Physical and phase space view.

use egui::{Sense, Ui};

use crate::state::AppState;
use crate::ui::PainterCanvas;

/// Fill the available space with the split-panel visualization
pub fn render_phase_view(ui: &mut Ui, state: &mut AppState) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let mut canvas = PainterCanvas::new(&painter, response.rect);
    state.render_frame(&mut canvas);
}
