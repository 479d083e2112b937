//! Read-only snapshots handed to collaborators

use serde::Serialize;

use super::actor::Actor;
use super::entities::{Coin, Enemy, Platform};
use super::state::{GamePhase, GameState};

/// Everything a renderer needs for one frame, borrowed from the session
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameView<'a> {
    pub actor: &'a Actor,
    pub platforms: &'a [Platform],
    pub coins: &'a [Coin],
    pub enemies: &'a [Enemy],
    pub coins_collected: u32,
    pub coins_required: u32,
    pub level: u32,
    pub level_complete: bool,
    pub paused: bool,
}

/// Score/lives readout for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub level: u32,
    pub lives: u32,
    pub phase: GamePhase,
}

impl Hud {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

impl GameState {
    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            actor: &self.actor,
            platforms: &self.platforms,
            coins: &self.coins,
            enemies: &self.enemies,
            coins_collected: self.coins_collected,
            coins_required: self.coins_required,
            level: self.level,
            level_complete: self.level_complete,
            paused: self.phase == GamePhase::Paused,
        }
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.actor.score,
            level: self.level,
            lives: self.actor.lives,
            phase: self.phase,
        }
    }
}
