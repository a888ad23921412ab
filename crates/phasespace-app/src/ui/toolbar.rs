//! Toolbar UI component.

use egui::Ui;

use crate::state::{AppState, ControlAction};

/// Render the top toolbar
pub fn render_toolbar(ui: &mut Ui, state: &mut AppState) {
    let mut actions = Vec::new();

    ui.horizontal_centered(|ui| {
        ui.add_space(8.0);

        if ui
            .button("➕ Add Oscillator")
            .on_hover_text("Add a randomized oscillator (A)")
            .clicked()
        {
            actions.push(ControlAction::Add);
        }

        ui.add_enabled_ui(state.oscillator_count() > 0, |ui| {
            if ui
                .button("🗑 Clear")
                .on_hover_text("Remove all oscillators (C)")
                .clicked()
            {
                actions.push(ControlAction::ClearAll);
            }
        });

        ui.separator();

        ui.label(format!("{} oscillators", state.oscillator_count()));

        // Frame timing (right side)
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            let timer = state.simulation().timer();
            match timer.fps() {
                Some(fps) => ui.label(format!("{:.1} ms  ({fps:.0} fps)", timer.delta_millis())),
                None => ui.label("—"),
            };
        });
    });

    state.apply(actions);
}
