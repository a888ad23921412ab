//! Application state management.

mod app_state;
mod control_state;

pub use app_state::*;
pub use control_state::*;
