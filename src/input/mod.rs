//! Input handling module
//!
//! Provides raw input state tracking and a key-to-action mapping layer.

mod mapper;
mod state;

pub use mapper::{Action, InputMapper};
pub use state::Input;
