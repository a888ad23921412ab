//! Oscillator control panel UI component.

use egui::{Color32, Sense, Ui, Vec2};
use phasespace_types::ParamKind;

use crate::state::{AppState, ControlAction};
use crate::ui::to_color32;

/// Render one slider group per oscillator and apply the resulting edits
pub fn render_control_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Oscillators");
    ui.separator();

    if state.controls().is_empty() {
        ui.label("Add an oscillator to get started");
        return;
    }

    let mut actions = Vec::new();

    egui::ScrollArea::vertical().show(ui, |ui| {
        let groups = state.controls().groups().to_vec();
        for group in groups {
            let Some(osc) = state.simulation().registry().get(group.id) else {
                continue;
            };
            let color = to_color32(osc.color());
            let values = ParamKind::ALL.map(|kind| (kind, osc.param(kind)));

            let header = egui::CollapsingHeader::new(group.title.as_str())
                .id_salt(group.id.raw())
                .open(Some(group.open))
                .show(ui, |ui| {
                    // No `step_by`: the slider would snap the stored value on
                    // every draw and report it as an edit.
                    for (kind, mut value) in values {
                        let slider = egui::Slider::new(&mut value, kind.range())
                            .text(kind.label())
                            .drag_value_speed(kind.step());
                        if ui.add(slider).changed() {
                            actions.push(ControlAction::Set {
                                id: group.id,
                                kind,
                                value,
                            });
                        }
                    }

                    ui.horizontal(|ui| {
                        color_swatch(ui, color);
                        if ui.button("🗑 Remove").clicked() {
                            actions.push(ControlAction::Remove(group.id));
                        }
                    });
                });

            if header.header_response.clicked() {
                if let Some(g) = state.controls_mut().group_mut(group.id) {
                    g.open = !g.open;
                }
            }
        }
    });

    state.apply(actions);
}

fn color_swatch(ui: &mut Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
}
