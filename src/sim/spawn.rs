//! Bounded-attempt placement of coins and enemies
//!
//! Both spawners pick a random eligible platform per attempt and return
//! `None` when the attempt budget runs out. Running out of room is an
//! expected outcome, not an error.

use glam::Vec2;
use rand::Rng;

use super::collision::rect_overlap;
use super::entities::{Coin, Enemy, Platform, PlatformId, PlatformKind};
use super::rect::Rect;
use crate::tuning::Tuning;

/// Try to place a coin resting on top of a non-ground platform
pub fn spawn_coin<R: Rng + ?Sized>(
    rng: &mut R,
    platforms: &[Platform],
    coins: &[Coin],
    tuning: &Tuning,
) -> Option<Coin> {
    let candidates: Vec<&Platform> = platforms
        .iter()
        .filter(|p| p.kind != PlatformKind::Ground)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let size = tuning.coin_size;
    for _ in 0..tuning.coin_spawn_attempts {
        let platform = candidates[rng.random_range(0..candidates.len())];
        let p = platform.rect;

        let x = p.left() + rng.random::<f32>() * (p.width() - size);
        let y = p.top() - size;
        let rect = Rect::square(Vec2::new(x, y), size);

        let on_platform = rect.left() >= p.left() && rect.right() <= p.right();
        let clear_of_coins = !coins.iter().any(|c| rect_overlap(&rect, &c.rect()));
        let clear_of_edges = rect.left() > tuning.coin_edge_margin
            && rect.right() < tuning.world_width - tuning.coin_edge_margin;

        if on_platform && clear_of_coins && clear_of_edges {
            return Some(Coin {
                pos: rect.pos,
                size,
            });
        }
    }

    log::debug!(
        "No room for a coin after {} attempts",
        tuning.coin_spawn_attempts
    );
    None
}

/// Try to place an enemy near the left end of a wide, static platform
pub fn spawn_enemy<R: Rng + ?Sized>(
    rng: &mut R,
    platforms: &[Platform],
    enemies: &[Enemy],
    tuning: &Tuning,
) -> Option<Enemy> {
    let candidates: Vec<(PlatformId, &Platform)> = platforms
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            !matches!(p.kind, PlatformKind::Ground | PlatformKind::Moving)
                && p.rect.width() >= tuning.enemy_min_platform_width
        })
        .map(|(i, p)| (PlatformId(i), p))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let size = tuning.enemy_size;
    for _ in 0..tuning.enemy_spawn_attempts {
        let (id, platform) = candidates[rng.random_range(0..candidates.len())];
        let pos = Vec2::new(
            platform.rect.left() + tuning.enemy_inset,
            platform.rect.top() - size,
        );
        let rect = Rect::square(pos, size);

        if enemies.iter().any(|e| rect_overlap(&rect, &e.rect)) {
            continue;
        }

        let speed = if tuning.enemy_max_speed > tuning.enemy_min_speed {
            rng.random_range(tuning.enemy_min_speed..tuning.enemy_max_speed)
        } else {
            tuning.enemy_min_speed
        };
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        return Some(Enemy {
            rect,
            speed,
            direction,
            platform: id,
        });
    }

    log::debug!(
        "No room for an enemy after {} attempts",
        tuning.enemy_spawn_attempts
    );
    None
}
