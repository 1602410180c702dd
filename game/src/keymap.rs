//! Raw input messages to game events.

use g2048_core::{Direction, Event};
use g2048_term::{Key, ModMask, Msg};

/// The game event for `msg`, or `None` for keys the game ignores.
///
/// Arrows, `wasd` and `hjkl` move; Enter and `r` restart; Esc, `q` and
/// Ctrl-C quit.
pub fn event_for(msg: &Msg) -> Option<Event> {
    let (key, modifiers) = match *msg {
        Msg::Resize { .. } => return Some(Event::Resize),
        Msg::Key { key, modifiers } => (key, modifiers),
    };

    if modifiers.contains(ModMask::CTRL) {
        return match key {
            Key::Char('c') | Key::Char('C') => Some(Event::Quit),
            _ => None,
        };
    }

    let event = match key {
        Key::ArrowUp => Event::Move(Direction::Up),
        Key::ArrowDown => Event::Move(Direction::Down),
        Key::ArrowLeft => Event::Move(Direction::Left),
        Key::ArrowRight => Event::Move(Direction::Right),
        Key::Enter => Event::Restart,
        Key::Escape => Event::Quit,
        Key::Char(c) => match c.to_ascii_lowercase() {
            'w' | 'k' => Event::Move(Direction::Up),
            's' | 'j' => Event::Move(Direction::Down),
            'a' | 'h' => Event::Move(Direction::Left),
            'd' | 'l' => Event::Move(Direction::Right),
            'r' => Event::Restart,
            'q' => Event::Quit,
            _ => return None,
        },
    };
    Some(event)
}
