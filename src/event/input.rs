// RustPixel
// copyright zipxing@hotmail.com 2022~2024

//! This module provides a unified input Event, describing key presses and
//! terminal resizes. Input events read by render adapters are converted here
//! to unified Event then processed by the model.

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Event {
    /// A single key press.
    Key(KeyEvent),
    /// The render surface changed to (columns, rows).
    Resize(u16, u16),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
}

impl KeyEvent {
    pub const fn new(code: KeyCode) -> KeyEvent {
        KeyEvent { code }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyCode {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Tab,
    Esc,
}

impl From<char> for Event {
    fn from(c: char) -> Self {
        Event::Key(KeyEvent::new(KeyCode::Char(c)))
    }
}
