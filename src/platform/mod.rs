//! Platform abstraction layer
//!
//! Collaborators at the edge of the simulation:
//! - Input: keyboard/touch state sampled once per tick
//! - Output: renderer and HUD consuming read-only views
//! - Autopilot: demo-mode input driven from the game state

pub mod autopilot;
pub mod input;
pub mod output;

pub use autopilot::Autopilot;
pub use input::{InputSource, Key, KeyboardState, TouchButton};
pub use output::{Display, LogDisplay, NullRenderer, Renderer};
