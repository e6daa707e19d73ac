//! Core engine module
//!
//! Contains the main Engine struct and configuration

mod debug;
mod engine;
mod time;

pub use debug::FrameStats;
pub use engine::{Engine, EngineConfig, EngineContext, EngineError, Game};
pub use time::Time;
