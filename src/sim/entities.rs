//! World entities: platforms, coins and enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Platform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Full-width floor along the bottom of the world
    Ground,
    #[default]
    Normal,
    /// Oscillates horizontally between the world margins
    Moving,
    /// Launches the actor higher than a jump on landing
    Bouncy,
}

/// Index handle into the current level's platform list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformId(pub usize);

/// Horizontal motion state of a moving platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformMotion {
    /// +1 right, -1 left
    pub direction: f32,
    /// px/tick
    pub speed: f32,
}

/// A platform the actor can stand on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
    /// Only present for `Moving` platforms
    pub motion: Option<PlatformMotion>,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: PlatformKind, speed: f32) -> Self {
        let motion = (kind == PlatformKind::Moving).then_some(PlatformMotion {
            direction: 1.0,
            speed,
        });
        Self {
            rect: Rect::new(x, y, width, height),
            kind,
            motion,
        }
    }

    /// Advance a moving platform one tick, reversing at the world margins
    ///
    /// `min_x`/`max_x` bound the platform's left and right edges.
    pub fn update(&mut self, min_x: f32, max_x: f32) {
        let Some(motion) = self.motion.as_mut() else {
            return;
        };
        self.rect.pos.x += motion.speed * motion.direction;
        if self.rect.left() <= min_x || self.rect.right() >= max_x {
            motion.direction = -motion.direction;
        }
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
}

impl Coin {
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// px/tick
    pub speed: f32,
    /// +1 right, -1 left
    pub direction: f32,
    /// Platform this enemy patrols
    pub platform: PlatformId,
}

impl Enemy {
    /// Advance one tick along the patrol platform, then clamp into the world
    ///
    /// A stale platform handle leaves the patrol unbounded; the world clamp
    /// still applies.
    pub fn update(&mut self, platforms: &[Platform], world_width: f32) {
        self.rect.pos.x += self.speed * self.direction;

        if let Some(platform) = platforms.get(self.platform.0) {
            if self.rect.left() <= platform.rect.left()
                || self.rect.right() >= platform.rect.right()
            {
                self.direction = -self.direction;
            }
        }

        if self.rect.pos.x < 0.0 {
            self.rect.pos.x = 0.0;
        }
        if self.rect.right() > world_width {
            self.rect.pos.x = world_width - self.rect.width();
        }
    }
}
