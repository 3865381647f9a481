//! Mode state machine: Menu -> Playing -> GameOver -> (Playing | Exiting).
//!
//! Transitions are a pure function of the current mode and one event, so they
//! can be tested without a terminal. [`Game`](crate::game::Game) applies them.

use crate::screens::MenuLayout;
use crate::types::{InputEvent, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
    GameOver { score: u32 },
    /// Terminal: the process should shut down.
    Exiting,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Menu => "menu",
            Mode::Playing => "playing",
            Mode::GameOver { .. } => "game-over",
            Mode::Exiting => "exiting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeEvent {
    Input(InputEvent),
    /// The running session ended with this score.
    RoundOver { score: u32 },
}

/// Next mode after `event`. Unrecognised events leave the mode unchanged.
pub fn next_mode(mode: Mode, event: &ModeEvent, layout: &MenuLayout) -> Mode {
    use InputEvent::*;

    match (mode, event) {
        (Mode::Exiting, _) => Mode::Exiting,
        (_, ModeEvent::Input(Quit)) => Mode::Exiting,

        (Mode::Playing, ModeEvent::RoundOver { score }) => Mode::GameOver { score: *score },
        (_, ModeEvent::RoundOver { .. }) => mode,

        (Mode::Menu | Mode::GameOver { .. }, ModeEvent::Input(input)) => match input {
            KeyDown(Key::Space | Key::Enter) => Mode::Playing,
            KeyDown(Key::Char('r')) if matches!(mode, Mode::GameOver { .. }) => Mode::Playing,
            KeyDown(Key::Escape | Key::Char('q')) => Mode::Exiting,
            MouseDown { x, y } if layout.hit_primary(*x, *y) => Mode::Playing,
            MouseDown { x, y } if layout.hit_quit(*x, *y) => Mode::Exiting,
            _ => mode,
        },

        // In-play keys (flap, pause) are session input, not transitions.
        (Mode::Playing, ModeEvent::Input(_)) => Mode::Playing,
    }
}
