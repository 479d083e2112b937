//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one frame in a fixed order:
//! actor, platforms, enemies, coin pickups, enemy contacts, periodic
//! spawns, level completion, game over.

use super::collision::{check_pickup, is_stomp, rect_overlap};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick, sampled once per tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Horizontal intent: -1 left, 0 none, +1 right
    pub horizontal: i8,
    /// Jump held
    pub jump: bool,
}

/// Advance the game state by one tick of `dt` seconds
///
/// Physics moves in fixed per-tick steps; `dt` only drives the level
/// transition and spawn timers.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // Level freezes while the completion window runs
    if state.level_complete {
        state.transition_timer += dt;
        if state.transition_timer > state.tuning.level_transition_delay {
            state.next_level();
        }
        return;
    }

    let lives_before = state.actor.lives;
    let fell = state
        .actor
        .update(input.horizontal, input.jump, &state.platforms, &state.tuning);
    if fell {
        log::debug!("Actor fell out of the world");
        state.events.push(GameEvent::ActorFell);
        if state.actor.lives < lives_before {
            state.events.push(GameEvent::ActorHurt {
                lives: state.actor.lives,
            });
        }
    }

    let min_x = state.tuning.moving_platform_margin;
    let max_x = state.tuning.world_width - state.tuning.moving_platform_margin;
    for platform in &mut state.platforms {
        platform.update(min_x, max_x);
    }

    drop_stray_enemies(state);
    for enemy in &mut state.enemies {
        enemy.update(&state.platforms, state.tuning.world_width);
    }

    collect_coins(state);
    resolve_enemy_contacts(state);
    spawn_periodically(state, dt);
    check_level_complete(state);
    state.check_game_over();
}

/// Enemies must patrol a platform of the current level
fn drop_stray_enemies(state: &mut GameState) {
    let platform_count = state.platforms.len();
    state.enemies.retain(|enemy| {
        let valid = enemy.platform.0 < platform_count;
        if !valid {
            log::warn!(
                "Dropping enemy on missing platform {:?} ({platform_count} platforms)",
                enemy.platform
            );
        }
        valid
    });
}

fn collect_coins(state: &mut GameState) {
    let before = state.coins.len();
    let actor = &state.actor;
    state.coins.retain(|coin| !check_pickup(actor, coin));

    for _ in state.coins.len()..before {
        state.actor.add_score(state.tuning.coin_score);
        state.coins_collected += 1;
        state.events.push(GameEvent::CoinCollected {
            collected: state.coins_collected,
            required: state.coins_required,
        });
    }
}

/// Stomp enemies the actor lands on; every other contact hurts
fn resolve_enemy_contacts(state: &mut GameState) {
    let mut i = 0;
    while i < state.enemies.len() {
        let enemy = &state.enemies[i];
        if !rect_overlap(&state.actor.rect, &enemy.rect) {
            i += 1;
            continue;
        }

        if is_stomp(&state.actor, enemy) {
            state.enemies.remove(i);
            state.actor.add_score(state.tuning.stomp_score);
            state.actor.vel.y = state.tuning.stomp_bounce;
            log::debug!("Enemy stomped, score={}", state.actor.score);
            state.events.push(GameEvent::EnemyStomped);
            continue;
        }

        if state.actor.take_damage(&state.tuning) {
            log::debug!("Actor hurt by enemy, lives={}", state.actor.lives);
            state.events.push(GameEvent::ActorHurt {
                lives: state.actor.lives,
            });
        }
        i += 1;
    }
}

fn spawn_periodically(state: &mut GameState, dt: f32) {
    state.coin_spawn_timer += dt;
    if state.coin_spawn_timer > state.tuning.coin_spawn_interval
        && state.coins.len() < state.tuning.max_coins
    {
        state.try_spawn_coin();
        state.coin_spawn_timer = 0.0;
    }

    let max_enemies = state.tuning.enemy_cap(state.level);
    if max_enemies > 0 {
        state.enemy_spawn_timer += dt;
        if state.enemy_spawn_timer > state.tuning.enemy_spawn_interval
            && state.enemies.len() < max_enemies
        {
            state.try_spawn_enemy();
            state.enemy_spawn_timer = 0.0;
        }
    }
}

fn check_level_complete(state: &mut GameState) {
    if !state.level_complete && state.coins_collected >= state.coins_required {
        state.level_complete = true;
        log::info!("Level {} complete", state.level);
        state.events.push(GameEvent::LevelComplete { level: state.level });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::entities::{Coin, Enemy, PlatformId};
    use crate::sim::rect::Rect;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        state.start();
        state
    }

    fn coin_on_actor(state: &GameState) -> Coin {
        let size = state.tuning.coin_size;
        Coin {
            pos: state.actor.rect.center() - Vec2::splat(size / 2.0),
            size,
        }
    }

    #[test]
    fn test_menu_does_not_tick() {
        let mut state = GameState::new(1, Tuning::default());
        let before = state.actor.clone();
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.actor, before);
    }

    #[test]
    fn test_pause_freezes_and_resumes() {
        let mut state = playing(2);
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Paused);

        let frozen = state.actor.clone();
        let right = TickInput {
            horizontal: 1,
            ..Default::default()
        };
        tick(&mut state, &right, SIM_DT);
        assert_eq!(state.actor, frozen);
        assert_eq!(state.time_ticks, 0);

        state.toggle_pause();
        tick(&mut state, &right, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(
            state.actor.rect.pos.x,
            frozen.rect.pos.x + state.tuning.actor_speed
        );
    }

    #[test]
    fn test_level_complete_after_required_coins_then_advance() {
        let mut state = playing(3);
        assert_eq!(state.coins_required, 7);
        let mut completions = 0;

        for pickup in 1..=7 {
            state.coins = vec![coin_on_actor(&state)];
            tick(&mut state, &TickInput::default(), SIM_DT);
            assert_eq!(state.coins_collected, pickup);
            completions += state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::LevelComplete { .. }))
                .count();
        }
        assert!(state.level_complete);
        assert_eq!(completions, 1);
        assert_eq!(state.actor.score, 7 * 50);

        // Frozen: no pickups, no retrigger, until the delay elapses
        let mut ticks = 0;
        while state.level == 1 {
            state.coins = vec![coin_on_actor(&state)];
            tick(&mut state, &TickInput::default(), SIM_DT);
            completions += state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::LevelComplete { .. }))
                .count();
            ticks += 1;
            assert!(ticks <= 200, "level never advanced");
        }
        assert!(ticks >= 120);
        assert_eq!(completions, 1);
        assert_eq!(state.level, 2);
        assert_eq!(state.coins_collected, 0);
        assert_eq!(state.coins_required, 9);
        assert!(!state.level_complete);
        assert_eq!(state.actor.score, 7 * 50 + 100);
        assert!(state.events.contains(&GameEvent::LevelStarted { level: 2 }));
    }

    #[test]
    fn test_level_complete_freezes_world() {
        let mut state = playing(12);
        state.next_level();
        state.level_complete = true;
        state.coins_collected = state.coins_required;
        // Airborne with enemies and moving platforms around: anything left
        // running would show up as a change
        state.actor.rect.pos = Vec2::new(200.0, 100.0);
        state.actor.vel = Vec2::new(0.0, 3.0);
        state.coins.push(coin_on_actor(&state));

        let actor = state.actor.clone();
        let platforms = state.platforms.clone();
        let enemies = state.enemies.clone();
        let coins = state.coins.clone();
        let collected = state.coins_collected;
        assert!(!enemies.is_empty());

        let input = TickInput {
            horizontal: 1,
            jump: true,
        };
        for _ in 0..60 {
            tick(&mut state, &input, SIM_DT);
        }

        assert_eq!(state.level, 2);
        assert!(state.level_complete);
        assert_eq!(state.time_ticks, 60);
        assert_eq!(state.actor, actor);
        assert_eq!(state.platforms, platforms);
        assert_eq!(state.enemies, enemies);
        assert_eq!(state.coins, coins);
        assert_eq!(state.coins_collected, collected);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_enemy_on_missing_platform_is_dropped() {
        let mut state = playing(13);
        state.enemies = vec![
            Enemy {
                rect: Rect::new(110.0, 375.0, 25.0, 25.0),
                speed: 1.0,
                direction: 1.0,
                platform: PlatformId(1),
            },
            Enemy {
                rect: Rect::new(600.0, 100.0, 25.0, 25.0),
                speed: 1.0,
                direction: 1.0,
                platform: PlatformId(99),
            },
        ];

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].platform, PlatformId(1));
    }

    #[test]
    fn test_stomp_defeats_enemy() {
        let mut state = playing(4);
        state.coins.clear();
        state.enemies = vec![Enemy {
            rect: Rect::new(100.0, 375.0, 25.0, 25.0),
            speed: 1.0,
            direction: 1.0,
            platform: PlatformId(1),
        }];
        // Falls to a bottom edge of 377.8 this tick, 2.8 into the enemy
        state.actor.rect.pos = Vec2::new(100.0, 323.0);
        state.actor.vel.y = 4.0;
        state.actor.jumping = true;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.enemies.is_empty());
        assert_eq!(state.actor.score, 100);
        assert_eq!(state.actor.vel.y, -10.0);
        assert_eq!(state.actor.lives, 3);
        assert!(state.events.contains(&GameEvent::EnemyStomped));
    }

    #[test]
    fn test_side_contact_hurts_once_per_window() {
        let mut state = playing(5);
        state.coins.clear();
        state.enemies = vec![Enemy {
            rect: Rect::new(110.0, 375.0, 25.0, 25.0),
            speed: 0.0,
            direction: 1.0,
            platform: PlatformId(1),
        }];
        // Standing on the platform the enemy patrols
        state.actor.rect.pos = Vec2::new(101.0, 350.0);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.actor.lives, 2);
        assert!(state.actor.invulnerable);
        assert!(state.events.contains(&GameEvent::ActorHurt { lives: 2 }));
        assert_eq!(state.enemies.len(), 1);

        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.actor.lives, 2);
    }

    #[test]
    fn test_last_life_lost_is_game_over() {
        let mut state = playing(6);
        state.coins.clear();
        state.actor.lives = 1;
        state.actor.rect.pos.y = state.tuning.world_height + 1.0;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.actor.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::ActorFell));
        assert!(state.events.contains(&GameEvent::GameOver { score: 0 }));

        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_periodic_coin_spawn() {
        let mut state = playing(7);
        state.coins.clear();

        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.coins.len() as u32 + state.coins_collected, 1);
    }

    #[test]
    fn test_periodic_enemy_spawn_from_level_two() {
        let mut state = playing(8);
        state.next_level();
        state.enemies.clear();

        for _ in 0..400 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.enemies.len(), 1);
        for enemy in &state.enemies {
            assert!(enemy.platform.0 < state.platforms.len());
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing(99999);
        let mut state2 = playing(99999);

        let inputs = [
            TickInput {
                horizontal: 1,
                ..Default::default()
            },
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput {
                horizontal: -1,
                jump: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..100 {
            for input in &inputs {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.actor, state2.actor);
        assert_eq!(state1.coins, state2.coins);
        assert_eq!(state1.enemies, state2.enemies);
    }
}
