//! Session state and level progression
//!
//! `GameState` owns every entity of the current level. Collaborators only
//! ever see it through the read-only views in `view`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::entities::{Coin, Enemy, Platform};
use super::level::build_platforms;
use super::spawn::{spawn_coin, spawn_enemy};
use crate::tuning::Tuning;

/// Overall state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Out of lives; only a restart leaves this state
    GameOver,
    /// Quiescent while a restart is pending
    Stopped,
}

/// Something that happened during a tick, for collaborators and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { collected: u32, required: u32 },
    EnemyStomped,
    ActorHurt { lives: u32 },
    ActorFell,
    LevelComplete { level: u32 },
    LevelStarted { level: u32 },
    BonusLife { lives: u32 },
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Current level (1-based)
    pub level: u32,
    pub coins_required: u32,
    /// Coins collected this level
    pub coins_collected: u32,
    pub level_complete: bool,
    /// Seconds since the level was completed
    pub transition_timer: f32,
    /// Seconds since the last periodic coin spawn
    pub coin_spawn_timer: f32,
    /// Seconds since the last periodic enemy spawn
    pub enemy_spawn_timer: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub actor: Actor,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session at level 1 in the menu
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let actor = Actor::new(&tuning);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Menu,
            level: 1,
            coins_required: 0,
            coins_collected: 0,
            level_complete: false,
            transition_timer: 0.0,
            coin_spawn_timer: 0.0,
            enemy_spawn_timer: 0.0,
            time_ticks: 0,
            actor,
            platforms: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            events: Vec::new(),
        };
        state.setup_level();
        state
    }

    /// Rebuild every per-level entity set for the current level
    pub fn setup_level(&mut self) {
        self.coins_collected = 0;
        self.level_complete = false;
        self.transition_timer = 0.0;
        self.coin_spawn_timer = 0.0;
        self.enemy_spawn_timer = 0.0;
        self.coins_required = self.tuning.coins_required(self.level);

        self.platforms = build_platforms(self.level, &self.tuning);
        self.coins.clear();
        self.enemies.clear();

        for _ in 0..self.coins_required + self.tuning.extra_coins_at_setup {
            self.try_spawn_coin();
        }
        for _ in 0..self.tuning.initial_enemies(self.level) {
            self.try_spawn_enemy();
        }

        self.actor.respawn(&self.tuning);

        log::info!(
            "Level {}: need {} coins, platforms={}, coins={}, enemies={}",
            self.level,
            self.coins_required,
            self.platforms.len(),
            self.coins.len(),
            self.enemies.len()
        );
    }

    /// Spawn one coin if there is room; returns whether one was placed
    pub fn try_spawn_coin(&mut self) -> bool {
        match spawn_coin(&mut self.rng, &self.platforms, &self.coins, &self.tuning) {
            Some(coin) => {
                self.coins.push(coin);
                true
            }
            None => false,
        }
    }

    /// Spawn one enemy if there is room; returns whether one was placed
    pub fn try_spawn_enemy(&mut self) -> bool {
        match spawn_enemy(&mut self.rng, &self.platforms, &self.enemies, &self.tuning) {
            Some(enemy) => {
                self.enemies.push(enemy);
                true
            }
            None => false,
        }
    }

    /// Move on to the next level, keeping score and lives
    pub fn next_level(&mut self) {
        self.level += 1;

        let mut actor = Actor::carry_over(&self.tuning, self.actor.score, self.actor.lives);
        if self.tuning.grants_bonus_life(self.level) {
            actor.lives += 1;
            log::info!("Bonus life! lives={}", actor.lives);
            self.events.push(GameEvent::BonusLife { lives: actor.lives });
        }
        actor.add_score(self.tuning.level_bonus(self.level));
        self.actor = actor;

        self.setup_level();
        self.events.push(GameEvent::LevelStarted { level: self.level });
    }

    /// Leave the menu and begin play
    pub fn start(&mut self) {
        if self.phase == GamePhase::Menu {
            self.phase = GamePhase::Playing;
            log::info!("Game started");
        }
    }

    /// Toggle between `Playing` and `Paused`; other phases are unaffected
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    /// Halt the session ahead of a restart
    pub fn stop(&mut self) {
        self.phase = GamePhase::Stopped;
    }

    /// Reinitialise from level 1 with a fresh actor and resume play
    pub fn restart(&mut self) {
        self.level = 1;
        self.actor = Actor::new(&self.tuning);
        self.setup_level();
        self.events.clear();
        self.phase = GamePhase::Playing;
        log::info!("Game restarted");
    }

    /// Mark the session over once the actor has no lives left
    pub(crate) fn check_game_over(&mut self) {
        if !self.actor.is_alive() && self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            log::info!("Game over: score={} level={}", self.actor.score, self.level);
            self.events.push(GameEvent::GameOver {
                score: self.actor.score,
            });
        }
    }
}
