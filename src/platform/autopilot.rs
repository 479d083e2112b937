//! Idle/demo mode: plays the game by pressing keys

use glam::Vec2;

use super::input::{Key, KeyboardState};
use crate::sim::{GamePhase, GameState, TickInput};

/// Ticks without horizontal progress before the autopilot jumps
const STUCK_TICKS: u32 = 3;
/// Horizontal dead zone around the target
const ARRIVE_DISTANCE: f32 = 4.0;
/// Only jump for coins roughly overhead
const JUMP_REACH: f32 = 120.0;
/// Jump over enemies closer than this
const ENEMY_CLEARANCE: f32 = 60.0;

/// Simple coin-chasing bot
#[derive(Debug, Default)]
pub struct Autopilot {
    last_x: Option<f32>,
    stuck_ticks: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide this tick's input from the current state
    pub fn plan(&mut self, state: &GameState) -> TickInput {
        if state.phase != GamePhase::Playing || state.level_complete {
            self.last_x = None;
            self.stuck_ticks = 0;
            return TickInput::default();
        }

        let actor = &state.actor;
        let center = actor.rect.center();

        // Chase the nearest coin, or drift back to the middle of the world
        let target = state
            .coins
            .iter()
            .map(|coin| coin.rect().center())
            .min_by(|a, b| {
                a.distance(center)
                    .partial_cmp(&b.distance(center))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(Vec2::new(state.tuning.world_width / 2.0, center.y));

        let dx = target.x - center.x;
        let horizontal = if dx > ARRIVE_DISTANCE {
            1
        } else if dx < -ARRIVE_DISTANCE {
            -1
        } else {
            0
        };

        let moved = self
            .last_x
            .is_none_or(|x| (x - actor.rect.pos.x).abs() > f32::EPSILON);
        if horizontal != 0 && !moved {
            self.stuck_ticks += 1;
        } else {
            self.stuck_ticks = 0;
        }
        self.last_x = Some(actor.rect.pos.x);

        let coin_overhead = target.y < actor.rect.top() && dx.abs() < JUMP_REACH;
        let enemy_ahead = state.enemies.iter().any(|e| {
            let ex = e.rect.center().x - center.x;
            ex.signum() == f32::from(horizontal)
                && ex.abs() < ENEMY_CLEARANCE
                && e.rect.overlaps_y(&actor.rect)
        });

        TickInput {
            horizontal,
            jump: coin_overhead || enemy_ahead || self.stuck_ticks >= STUCK_TICKS,
        }
    }

    /// Plan, then press/release keys to match
    pub fn drive(&mut self, state: &GameState, keys: &mut KeyboardState) {
        let input = self.plan(state);
        set_key(keys, Key::ArrowLeft, input.horizontal < 0);
        set_key(keys, Key::ArrowRight, input.horizontal > 0);
        set_key(keys, Key::Space, input.jump);
    }
}

fn set_key(keys: &mut KeyboardState, key: Key, held: bool) {
    if held {
        keys.key_down(key);
    } else {
        keys.key_up(key);
    }
}
