//! Renderer and HUD collaborators

use crate::sim::{FrameView, Hud};

/// Draws a frame from a read-only view
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}

/// Shows score, level and lives, and the final score on game over
pub trait Display {
    fn update(&mut self, hud: &Hud);
    fn game_over(&mut self, final_score: u64);
}

/// Renderer that draws nothing (headless runs)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &FrameView<'_>) {}
}

/// HUD that logs whenever the readout changes
#[derive(Debug, Default)]
pub struct LogDisplay {
    last: Option<Hud>,
    pub final_score: Option<u64>,
}

impl Display for LogDisplay {
    fn update(&mut self, hud: &Hud) {
        if self.last.as_ref() != Some(hud) {
            log::info!(
                "score={} level={} lives={} ({:?})",
                hud.score,
                hud.level,
                hud.lives,
                hud.phase
            );
            self.last = Some(*hud);
        }
    }

    fn game_over(&mut self, final_score: u64) {
        log::info!("GAME OVER - final score {final_score}");
        self.final_score = Some(final_score);
    }
}
