//! Keyboard and touch input
//!
//! Events land in a `KeyboardState` whenever the host delivers them; the
//! simulation reads it once per tick through `InputSource`.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Source of per-tick movement intent
pub trait InputSource {
    /// -1 left, 0 none, +1 right
    fn horizontal(&self) -> i8;
    fn jump_pressed(&self) -> bool;
    /// Forget every held key (called on restart)
    fn reset(&mut self);

    /// Consume a pending pause toggle, if one was requested since the last call
    fn take_pause(&mut self) -> bool {
        false
    }

    /// Sample the current state into a tick's input
    fn sample(&self) -> TickInput {
        TickInput {
            horizontal: self.horizontal(),
            jump: self.jump_pressed(),
        }
    }
}

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    A,
    D,
    W,
    P,
    Escape,
}

impl Key {
    /// Map a DOM-style key name (as in `KeyboardEvent.key`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            " " | "Space" => Some(Key::Space),
            "a" | "A" => Some(Key::A),
            "d" | "D" => Some(Key::D),
            "w" | "W" => Some(Key::W),
            "p" | "P" => Some(Key::P),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }

    /// Keys whose default browser action (scrolling) should be suppressed
    pub fn blocks_scroll(&self) -> bool {
        matches!(
            self,
            Key::Space | Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight
        )
    }

    /// Keys that toggle pause when pressed
    pub fn toggles_pause(&self) -> bool {
        matches!(self, Key::P | Key::Escape)
    }
}

/// On-screen touch buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
    Jump,
}

impl TouchButton {
    fn key(self) -> Key {
        match self {
            TouchButton::Left => Key::ArrowLeft,
            TouchButton::Right => Key::ArrowRight,
            TouchButton::Jump => Key::Space,
        }
    }
}

/// Set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
    /// Pause key went down since the last `take_pause`
    pause_requested: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press a key; key repeat of an already held key is ignored
    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) && key.toggles_pause() {
            self.pause_requested = !self.pause_requested;
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Touch start/end/cancel map onto the equivalent keys
    pub fn touch(&mut self, button: TouchButton, pressed: bool) {
        if pressed {
            self.key_down(button.key());
        } else {
            self.key_up(button.key());
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn any_held(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.is_held(*k))
    }
}

impl InputSource for KeyboardState {
    fn horizontal(&self) -> i8 {
        let mut direction = 0;
        if self.any_held(&[Key::ArrowLeft, Key::A]) {
            direction -= 1;
        }
        if self.any_held(&[Key::ArrowRight, Key::D]) {
            direction += 1;
        }
        direction
    }

    fn jump_pressed(&self) -> bool {
        self.any_held(&[Key::Space, Key::W, Key::ArrowUp])
    }

    fn reset(&mut self) {
        self.held.clear();
        self.pause_requested = false;
    }

    fn take_pause(&mut self) -> bool {
        std::mem::take(&mut self.pause_requested)
    }
}
