//! Mapping from terminal events to game input.

use crate::types::{InputEvent, Key};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// One polled terminal event, as the host loop sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Polled {
    Game(InputEvent),
    /// New terminal size in cells.
    Resize(u16, u16),
}

/// Map a key press to a game key. Ctrl-C becomes [`InputEvent::Quit`].
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    let mapped = match key.code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
        _ => return None,
    };
    Some(InputEvent::KeyDown(mapped))
}

/// Ctrl-C always quits, whatever screen is showing.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map one terminal event.
///
/// Key repeats and releases are dropped: one physical press is one flap.
/// `to_world` converts a terminal cell to world coordinates and returns
/// `None` for cells outside the letterboxed world.
pub fn map_event(event: &Event, to_world: impl Fn(u16, u16) -> Option<(f32, f32)>) -> Option<Polled> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key).map(Polled::Game),
        Event::Key(_) => None,
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => to_world(*column, *row).map(|(x, y)| Polled::Game(InputEvent::MouseDown { x, y })),
        Event::Mouse(_) => None,
        Event::Resize(cols, rows) => Some(Polled::Resize(*cols, *rows)),
        _ => None,
    }
}
