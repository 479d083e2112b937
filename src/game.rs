//! Frame driver
//!
//! The host calls [`Game::frame`] once per displayed frame with the elapsed
//! time. Elapsed time is accumulated into fixed simulation ticks, input is
//! sampled once per tick, and the collaborators receive read-only views
//! afterwards. There is no self-rescheduling: when the host stops calling
//! `frame`, the simulation stops.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::platform::{Display, InputSource, Renderer};
use crate::sim::{GamePhase, GameState, tick};
use crate::tuning::Tuning;

/// Longest frame the driver will simulate (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// A session plus the input feeding it
pub struct Game<I: InputSource> {
    state: GameState,
    input: I,
    accumulator: f32,
    /// Seconds left in `Stopped` before the pending restart runs
    restart_timer: Option<f32>,
    game_over_reported: bool,
}

impl<I: InputSource> Game<I> {
    pub fn new(seed: u64, tuning: Tuning, input: I) -> Self {
        Self {
            state: GameState::new(seed, tuning),
            input,
            accumulator: 0.0,
            restart_timer: None,
            game_over_reported: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// State and input together, for input sources that read the state
    pub fn state_and_input(&mut self) -> (&GameState, &mut I) {
        (&self.state, &mut self.input)
    }

    /// Start from the menu; from game over this is a restart
    pub fn start(&mut self) {
        match self.state.phase {
            GamePhase::Menu => {
                self.state.start();
                self.accumulator = 0.0;
            }
            GamePhase::GameOver => self.restart(),
            _ => {}
        }
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
        self.accumulator = 0.0;
    }

    /// Stop the session now and reinitialise it after the restart delay
    pub fn restart(&mut self) {
        if self.restart_timer.is_some() {
            return;
        }
        self.state.stop();
        self.accumulator = 0.0;
        self.restart_timer = Some(self.state.tuning.restart_delay);
    }

    pub fn restart_pending(&self) -> bool {
        self.restart_timer.is_some()
    }

    /// Advance by one displayed frame of `dt` seconds and present it
    pub fn frame(&mut self, dt: f32, renderer: &mut impl Renderer, display: &mut impl Display) {
        // Non-finite frame time simulates nothing
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };

        if let Some(remaining) = self.restart_timer {
            let remaining = remaining - dt;
            if remaining > 0.0 {
                self.restart_timer = Some(remaining);
            } else {
                self.restart_timer = None;
                self.input.reset();
                self.state.restart();
                self.game_over_reported = false;
            }
        }

        if self.input.take_pause() {
            self.toggle_pause();
        }

        if self.state.phase == GamePhase::Playing {
            self.accumulator += dt;
            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.sample();
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                if self.state.phase != GamePhase::Playing {
                    self.accumulator = 0.0;
                    break;
                }
            }
        }

        if self.state.phase != GamePhase::Stopped {
            renderer.render(&self.state.frame_view());
        }
        display.update(&self.state.hud());

        if self.state.phase == GamePhase::GameOver && !self.game_over_reported {
            display.game_over(self.state.actor.score);
            self.game_over_reported = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Key, KeyboardState};
    use crate::sim::{FrameView, Hud};

    #[derive(Default)]
    struct Recorder {
        frames: usize,
        huds: Vec<Hud>,
        final_scores: Vec<u64>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, _view: &FrameView<'_>) {
            self.frames += 1;
        }
    }

    impl Display for Recorder {
        fn update(&mut self, hud: &Hud) {
            self.huds.push(*hud);
        }

        fn game_over(&mut self, final_score: u64) {
            self.final_scores.push(final_score);
        }
    }

    fn game() -> Game<KeyboardState> {
        Game::new(77, Tuning::default(), KeyboardState::new())
    }

    #[test]
    fn test_one_tick_per_frame_at_sim_rate() {
        let mut game = game();
        let mut renderer = Recorder::default();
        let mut display = Recorder::default();

        game.frame(SIM_DT, &mut renderer, &mut display);
        assert_eq!(game.state().time_ticks, 0, "menu doesn't tick");
        assert_eq!(renderer.frames, 1);

        game.start();
        for _ in 0..10 {
            game.frame(SIM_DT, &mut renderer, &mut display);
        }
        assert_eq!(game.state().time_ticks, 10);
        assert_eq!(display.huds.len(), 11);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut game = game();
        let mut out = Recorder::default();
        game.start();
        game.frame(5.0, &mut NoRender, &mut out);
        assert!(game.state().time_ticks <= u64::from(MAX_SUBSTEPS));
    }

    struct NoRender;

    impl Renderer for NoRender {
        fn render(&mut self, _view: &FrameView<'_>) {}
    }

    #[test]
    fn test_pause_stops_ticking() {
        let mut game = game();
        let mut out = Recorder::default();
        game.start();
        game.frame(SIM_DT, &mut NoRender, &mut out);
        game.toggle_pause();
        for _ in 0..5 {
            game.frame(SIM_DT, &mut NoRender, &mut out);
        }
        assert_eq!(game.state().time_ticks, 1);
        assert_eq!(out.huds.last().map(|h| h.phase), Some(GamePhase::Paused));
    }

    #[test]
    fn test_pause_key_toggles_both_ways() {
        let mut game = game();
        let mut out = Recorder::default();
        game.start();
        game.frame(SIM_DT, &mut NoRender, &mut out);

        game.input_mut().key_down(Key::P);
        game.input_mut().key_up(Key::P);
        for _ in 0..10 {
            game.frame(SIM_DT, &mut NoRender, &mut out);
        }
        assert_eq!(game.state().phase, GamePhase::Paused);
        assert_eq!(game.state().time_ticks, 1);

        game.input_mut().key_down(Key::Escape);
        game.frame(SIM_DT, &mut NoRender, &mut out);
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().time_ticks, 2);
    }

    #[test]
    fn test_non_finite_frame_time_is_ignored() {
        let mut game = game();
        let mut out = Recorder::default();
        game.start();

        game.frame(f32::NAN, &mut NoRender, &mut out);
        game.frame(f32::INFINITY, &mut NoRender, &mut out);
        assert_eq!(game.state().time_ticks, 0);

        for _ in 0..60 {
            game.frame(SIM_DT, &mut NoRender, &mut out);
        }
        assert_eq!(game.state().time_ticks, 60);
    }

    #[test]
    fn test_restart_holds_stopped_then_reinitialises() {
        let mut game = game();
        let mut renderer = Recorder::default();
        let mut display = Recorder::default();
        game.start();
        for _ in 0..30 {
            game.frame(SIM_DT, &mut renderer, &mut display);
        }
        game.input_mut().key_down(Key::ArrowRight);

        game.restart();
        game.restart();
        assert!(game.restart_pending());
        assert_eq!(game.state().phase, GamePhase::Stopped);

        let frames_before = renderer.frames;
        game.frame(0.05, &mut renderer, &mut display);
        assert_eq!(game.state().phase, GamePhase::Stopped);
        assert_eq!(renderer.frames, frames_before, "nothing rendered while stopped");

        game.frame(0.06, &mut renderer, &mut display);
        assert!(!game.restart_pending());
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().level, 1);
        assert_eq!(game.state().actor.lives, 3);
        assert_eq!(game.input_mut().horizontal(), 0, "input reset on restart");
    }

    #[test]
    fn test_game_over_reported_once_and_start_restarts() {
        let mut game = game();
        let mut display = Recorder::default();
        game.start();
        game.state.coins.clear();
        game.state.actor.lives = 1;
        game.state.actor.rect.pos.y = game.state.tuning.world_height + 1.0;

        for _ in 0..5 {
            game.frame(SIM_DT, &mut NoRender, &mut display);
        }
        assert_eq!(game.state().phase, GamePhase::GameOver);
        assert_eq!(display.final_scores, vec![0]);

        game.start();
        assert_eq!(game.state().phase, GamePhase::Stopped);
        game.frame(0.1, &mut NoRender, &mut display);
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().actor.lives, 3);
    }
}
