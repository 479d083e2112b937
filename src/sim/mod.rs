//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick physics steps
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod entities;
pub mod level;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod view;

pub use actor::{Actor, Facing};
pub use collision::{Contact, check_pickup, is_stomp, rect_overlap, resolve_actor_platform};
pub use entities::{Coin, Enemy, Platform, PlatformId, PlatformKind, PlatformMotion};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use view::{FrameView, Hud};
