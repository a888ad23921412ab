//! Main application structure.

use eframe::egui;
use phasespace_types::{ConfigError, VisualizerSettings};

use crate::state::{AppState, ControlAction};
use crate::ui::{render_control_panel, render_phase_view, render_toolbar};

/// Main application
pub struct PhaseSpaceApp {
    /// Application state
    state: AppState,

    /// UI visibility flags
    show_controls: bool,
}

impl PhaseSpaceApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: VisualizerSettings,
    ) -> Result<Self, ConfigError> {
        let state = AppState::new(settings)?;
        Self::configure_style(&cc.egui_ctx);
        Ok(Self::with_state(state))
    }

    /// Build the app around existing state, without a creation context
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            show_controls: true,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn configure_style(ctx: &egui::Context) {
        ctx.set_visuals(egui::Visuals::light());

        let mut style = (*ctx.style()).clone();
        style.visuals.window_rounding = egui::Rounding::same(8.0);
        style.visuals.menu_rounding = egui::Rounding::same(4.0);
        ctx.set_style(style);
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let mut actions = Vec::new();
        ctx.input(|input| {
            if input.key_pressed(egui::Key::A) {
                actions.push(ControlAction::Add);
            }
            if input.key_pressed(egui::Key::C) {
                actions.push(ControlAction::ClearAll);
            }
            if input.key_pressed(egui::Key::H) {
                self.show_controls = !self.show_controls;
            }
        });
        self.state.apply(actions);
    }
}

impl eframe::App for PhaseSpaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        // Top toolbar
        egui::TopBottomPanel::top("toolbar")
            .exact_height(40.0)
            .show(ctx, |ui| {
                render_toolbar(ui, &mut self.state);
            });

        // Right panel - oscillator controls
        if self.show_controls {
            egui::SidePanel::right("controls")
                .resizable(true)
                .default_width(280.0)
                .min_width(200.0)
                .max_width(450.0)
                .show(ctx, |ui| {
                    render_control_panel(ui, &mut self.state);
                });
        }

        // Central panel - physical and phase space
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                render_phase_view(ui, &mut self.state);
            });

        // Motion is continuous
        ctx.request_repaint();
    }
}
