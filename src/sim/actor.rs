//! The player-controlled actor
//!
//! Grounded/airborne is tracked by `jumping`; vulnerability is orthogonal
//! and tracked by the invulnerability window.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Contact, resolve_actor_platform};
use super::entities::{Platform, PlatformKind};
use super::rect::Rect;
use crate::tuning::Tuning;

/// Which way the actor is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player's actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub rect: Rect,
    /// px/tick
    pub vel: Vec2,
    pub facing: Facing,
    /// Airborne since the last jump; cleared on landing
    pub jumping: bool,
    pub invulnerable: bool,
    pub invulnerable_ticks: u32,
    pub lives: u32,
    pub score: u64,
}

impl Actor {
    /// Fresh actor at the respawn point with the starting lives
    pub fn new(tuning: &Tuning) -> Self {
        let mut actor = Self {
            rect: Rect::new(0.0, 0.0, tuning.actor_width, tuning.actor_height),
            vel: Vec2::ZERO,
            facing: Facing::Right,
            jumping: false,
            invulnerable: false,
            invulnerable_ticks: 0,
            lives: tuning.starting_lives,
            score: 0,
        };
        actor.respawn(tuning);
        actor
    }

    /// Fresh actor carrying over progress from a previous one
    pub fn carry_over(tuning: &Tuning, score: u64, lives: u32) -> Self {
        Self {
            score,
            lives,
            ..Self::new(tuning)
        }
    }

    /// Advance one tick
    ///
    /// `horizontal` is the input intent (only its sign is used). Returns
    /// true when the actor fell out of the bottom of the world and was
    /// respawned.
    pub fn update(
        &mut self,
        horizontal: i8,
        jump: bool,
        platforms: &[Platform],
        tuning: &Tuning,
    ) -> bool {
        let direction = horizontal.signum();
        self.vel.x = f32::from(direction) * tuning.actor_speed;
        match direction {
            1 => self.facing = Facing::Right,
            -1 => self.facing = Facing::Left,
            _ => {}
        }

        self.vel.y += tuning.gravity;

        if jump && !self.jumping {
            self.vel.y = tuning.jump_impulse;
            self.jumping = true;
        }

        self.rect.pos += self.vel;

        if self.rect.pos.x < 0.0 {
            self.rect.pos.x = 0.0;
        }
        if self.rect.right() > tuning.world_width {
            self.rect.pos.x = tuning.world_width - self.rect.width();
        }

        let fell = self.rect.pos.y > tuning.world_height;
        if fell {
            self.take_damage(tuning);
            self.respawn(tuning);
        }

        for platform in platforms {
            let contact = resolve_actor_platform(self, platform);
            if contact == Some(Contact::Top) && platform.kind == PlatformKind::Bouncy {
                self.vel.y = tuning.jump_impulse * tuning.bouncy_multiplier;
                self.jumping = true;
            }
        }

        if self.invulnerable {
            self.invulnerable_ticks = self.invulnerable_ticks.saturating_sub(1);
            if self.invulnerable_ticks == 0 {
                self.invulnerable = false;
            }
        }

        fell
    }

    /// Lose a life unless inside the invulnerability window
    ///
    /// Returns true if a life was actually lost.
    pub fn take_damage(&mut self, tuning: &Tuning) -> bool {
        if self.invulnerable {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invulnerable = true;
        self.invulnerable_ticks = tuning.invulnerable_ticks;
        true
    }

    /// Move to the default spawn point and stop
    pub fn respawn(&mut self, tuning: &Tuning) {
        self.rect.pos = Vec2::new(
            tuning.world_width / 2.0 - self.rect.width() / 2.0,
            tuning.world_height / 2.0,
        );
        self.vel = Vec2::ZERO;
        self.jumping = false;
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}
