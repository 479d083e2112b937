//! Hand-authored platform layouts
//!
//! Layouts are authored for an 800×600 world. Levels past the last layout
//! reuse it.

use super::entities::{Platform, PlatformKind};
use crate::tuning::Tuning;

use super::entities::PlatformKind::{Bouncy, Moving, Normal};

/// (x, y, width, height, kind)
type PlatformSpec = (f32, f32, f32, f32, PlatformKind);

const LAYOUTS: [&[PlatformSpec]; 4] = [
    // Level 1: static platforms only
    &[
        (100.0, 400.0, 200.0, 20.0, Normal),
        (400.0, 350.0, 150.0, 20.0, Normal),
        (200.0, 250.0, 100.0, 20.0, Normal),
        (500.0, 200.0, 120.0, 20.0, Normal),
    ],
    // Level 2: moving platforms
    &[
        (150.0, 400.0, 180.0, 20.0, Normal),
        (450.0, 350.0, 160.0, 20.0, Moving),
        (250.0, 280.0, 120.0, 20.0, Normal),
        (550.0, 220.0, 100.0, 20.0, Moving),
        (350.0, 150.0, 140.0, 20.0, Normal),
    ],
    // Level 3: bouncy platforms
    &[
        (100.0, 400.0, 150.0, 20.0, Normal),
        (350.0, 350.0, 120.0, 20.0, Moving),
        (200.0, 250.0, 100.0, 20.0, Bouncy),
        (500.0, 200.0, 140.0, 20.0, Moving),
        (300.0, 150.0, 100.0, 20.0, Bouncy),
    ],
    // Level 4+: mixed
    &[
        (80.0, 400.0, 120.0, 20.0, Moving),
        (300.0, 380.0, 100.0, 20.0, Bouncy),
        (500.0, 350.0, 150.0, 20.0, Moving),
        (200.0, 250.0, 120.0, 20.0, Bouncy),
        (400.0, 200.0, 100.0, 20.0, Moving),
        (600.0, 150.0, 120.0, 20.0, Bouncy),
    ],
];

/// Build the platform set for a level: the ground first, then the layout
pub fn build_platforms(level: u32, tuning: &Tuning) -> Vec<Platform> {
    let index = (level.max(1) as usize - 1).min(LAYOUTS.len() - 1);
    let layout = LAYOUTS[index];

    let mut platforms = Vec::with_capacity(layout.len() + 1);
    platforms.push(Platform::new(
        0.0,
        tuning.world_height - tuning.ground_height,
        tuning.world_width,
        tuning.ground_height,
        PlatformKind::Ground,
        0.0,
    ));
    platforms.extend(layout.iter().map(|&(x, y, w, h, kind)| {
        Platform::new(x, y, w, h, kind, tuning.moving_platform_speed)
    }));
    platforms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_comes_first() {
        let tuning = Tuning::default();
        let platforms = build_platforms(1, &tuning);
        assert_eq!(platforms.len(), 5);
        assert_eq!(platforms[0].kind, PlatformKind::Ground);
        assert_eq!(platforms[0].rect.top(), 550.0);
        assert_eq!(platforms[0].rect.width(), 800.0);
        assert!(platforms[1..].iter().all(|p| p.kind == PlatformKind::Normal));
    }

    #[test]
    fn test_later_levels_reuse_last_layout() {
        let tuning = Tuning::default();
        assert_eq!(build_platforms(4, &tuning), build_platforms(12, &tuning));
        assert_ne!(build_platforms(3, &tuning), build_platforms(4, &tuning));
    }

    #[test]
    fn test_moving_platforms_get_motion() {
        let tuning = Tuning::default();
        let platforms = build_platforms(2, &tuning);
        for p in &platforms {
            assert_eq!(p.motion.is_some(), p.kind == PlatformKind::Moving);
        }
    }
}
