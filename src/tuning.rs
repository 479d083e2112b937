//! Data-driven game balance
//!
//! Every constant the simulation reads at runtime lives here so a level
//! designer can override it from a JSON file. Missing fields fall back to
//! the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure to load a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runtime balance and physics parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub ground_height: f32,

    // === Actor ===
    pub actor_width: f32,
    pub actor_height: f32,
    /// Horizontal speed in px/tick
    pub actor_speed: f32,
    /// Downward acceleration in px/tick²
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_impulse: f32,
    pub bouncy_multiplier: f32,
    pub starting_lives: u32,
    pub invulnerable_ticks: u32,

    // === Coins ===
    pub coin_size: f32,
    pub coin_score: u64,
    pub coin_edge_margin: f32,
    pub coin_spawn_attempts: u32,
    /// Seconds between periodic coin spawns
    pub coin_spawn_interval: f32,
    pub max_coins: usize,
    pub extra_coins_at_setup: u32,

    // === Enemies ===
    pub enemy_size: f32,
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,
    pub enemy_inset: f32,
    pub enemy_min_platform_width: f32,
    pub enemy_spawn_attempts: u32,
    /// Seconds between periodic enemy spawns
    pub enemy_spawn_interval: f32,
    pub stomp_score: u64,
    pub stomp_bounce: f32,
    /// First level that has enemies
    pub enemies_from_level: u32,
    /// Cap on enemies placed at level setup
    pub max_initial_enemies: u32,
    /// Cap on the enemy population for periodic spawns
    pub max_enemies: u32,

    // === Platforms ===
    pub moving_platform_margin: f32,
    pub moving_platform_speed: f32,

    // === Progression ===
    pub base_coins_required: u32,
    pub coins_required_per_level: u32,
    /// Seconds the level stays frozen after completion
    pub level_transition_delay: f32,
    pub bonus_life_every: u32,
    pub level_bonus_score: u64,
    /// Seconds spent in `Stopped` before a restart reinitialises
    pub restart_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            actor_speed: ACTOR_SPEED,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            bouncy_multiplier: BOUNCY_MULTIPLIER,
            starting_lives: STARTING_LIVES,
            invulnerable_ticks: INVULNERABLE_TICKS,

            coin_size: COIN_SIZE,
            coin_score: COIN_SCORE,
            coin_edge_margin: COIN_EDGE_MARGIN,
            coin_spawn_attempts: COIN_SPAWN_ATTEMPTS,
            coin_spawn_interval: COIN_SPAWN_INTERVAL,
            max_coins: MAX_COINS,
            extra_coins_at_setup: EXTRA_COINS_AT_SETUP,

            enemy_size: ENEMY_SIZE,
            enemy_min_speed: ENEMY_MIN_SPEED,
            enemy_max_speed: ENEMY_MAX_SPEED,
            enemy_inset: ENEMY_INSET,
            enemy_min_platform_width: ENEMY_MIN_PLATFORM_WIDTH,
            enemy_spawn_attempts: ENEMY_SPAWN_ATTEMPTS,
            enemy_spawn_interval: ENEMY_SPAWN_INTERVAL,
            stomp_score: STOMP_SCORE,
            stomp_bounce: STOMP_BOUNCE,
            enemies_from_level: ENEMIES_FROM_LEVEL,
            max_initial_enemies: MAX_INITIAL_ENEMIES,
            max_enemies: MAX_ENEMIES,

            moving_platform_margin: MOVING_PLATFORM_MARGIN,
            moving_platform_speed: MOVING_PLATFORM_SPEED,

            base_coins_required: BASE_COINS_REQUIRED,
            coins_required_per_level: COINS_REQUIRED_PER_LEVEL,
            level_transition_delay: LEVEL_TRANSITION_DELAY,
            bonus_life_every: BONUS_LIFE_EVERY,
            level_bonus_score: LEVEL_BONUS_SCORE,
            restart_delay: RESTART_DELAY,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a tuning file, falling back to defaults when it is unusable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Coins needed to clear a level
    pub fn coins_required(&self, level: u32) -> u32 {
        self.base_coins_required + level * self.coins_required_per_level
    }

    /// Enemies spawned when a level is set up
    pub fn initial_enemies(&self, level: u32) -> u32 {
        if level >= self.enemies_from_level {
            level.min(self.max_initial_enemies)
        } else {
            0
        }
    }

    /// Population cap for periodic enemy spawns (0 disables them)
    pub fn enemy_cap(&self, level: u32) -> usize {
        if level >= self.enemies_from_level {
            level.min(self.max_enemies) as usize
        } else {
            0
        }
    }

    /// Score granted on arriving at `level`
    pub fn level_bonus(&self, level: u32) -> u64 {
        self.level_bonus_score * u64::from(level.saturating_sub(1))
    }

    /// Whether arriving at `level` grants an extra life
    pub fn grants_bonus_life(&self, level: u32) -> bool {
        self.bonus_life_every > 0 && level % self.bonus_life_every == 0
    }
}
