//! Coin Hopper - a side-scrolling coin-collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level state)
//! - `platform`: Input, render and HUD collaborators
//! - `tuning`: Data-driven game balance
//! - `game`: Frame driver tying the simulation to its collaborators

pub mod game;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Height of the ground slab along the bottom of the world
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Actor defaults (velocities are per tick)
    pub const ACTOR_WIDTH: f32 = 30.0;
    pub const ACTOR_HEIGHT: f32 = 50.0;
    pub const ACTOR_SPEED: f32 = 5.0;
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_IMPULSE: f32 = -15.0;
    pub const BOUNCY_MULTIPLIER: f32 = 1.5;
    pub const STARTING_LIVES: u32 = 3;
    /// One second at 60 Hz
    pub const INVULNERABLE_TICKS: u32 = 60;

    /// Coins
    pub const COIN_SIZE: f32 = 15.0;
    pub const COIN_SCORE: u64 = 50;
    pub const COIN_EDGE_MARGIN: f32 = 20.0;
    pub const COIN_SPAWN_ATTEMPTS: u32 = 50;
    pub const COIN_SPAWN_INTERVAL: f32 = 3.0;
    pub const MAX_COINS: usize = 8;
    pub const EXTRA_COINS_AT_SETUP: u32 = 3;

    /// Enemies
    pub const ENEMY_SIZE: f32 = 25.0;
    pub const ENEMY_MIN_SPEED: f32 = 1.0;
    pub const ENEMY_MAX_SPEED: f32 = 2.0;
    pub const ENEMY_INSET: f32 = 10.0;
    pub const ENEMY_MIN_PLATFORM_WIDTH: f32 = 80.0;
    pub const ENEMY_SPAWN_ATTEMPTS: u32 = 20;
    pub const ENEMY_SPAWN_INTERVAL: f32 = 5.0;
    pub const STOMP_SCORE: u64 = 100;
    pub const STOMP_BOUNCE: f32 = -10.0;
    /// Enemies appear from this level on
    pub const ENEMIES_FROM_LEVEL: u32 = 2;
    /// Setup places min(level, this) enemies
    pub const MAX_INITIAL_ENEMIES: u32 = 3;
    /// Periodic spawns fill up to min(level, this) enemies
    pub const MAX_ENEMIES: u32 = 4;

    /// Moving platforms reverse this far from the world edges
    pub const MOVING_PLATFORM_MARGIN: f32 = 50.0;
    pub const MOVING_PLATFORM_SPEED: f32 = 1.0;

    /// Level progression
    pub const BASE_COINS_REQUIRED: u32 = 5;
    pub const COINS_REQUIRED_PER_LEVEL: u32 = 2;
    pub const LEVEL_TRANSITION_DELAY: f32 = 2.0;
    pub const BONUS_LIFE_EVERY: u32 = 3;
    pub const LEVEL_BONUS_SCORE: u64 = 100;

    /// Quiescent delay between stopping and reinitialising on restart
    pub const RESTART_DELAY: f32 = 0.1;

    /// Slack on the crossing windows so a resting actor is not lost to f32 rounding
    pub const CONTACT_EPSILON: f32 = 1e-3;
}
