//! Phase space visualizer application library

pub mod app;
pub mod config;
pub mod state;
pub mod ui;

// Re-export commonly used items
pub use app::PhaseSpaceApp;
pub use config::load_settings;
pub use state::AppState;
