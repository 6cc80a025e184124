// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Cell is the basic rendering unit, one terminal character with its colors.
//! Many Cells form a Buffer to manage rendering.

use crate::render::style::{Color, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub fn set_symbol(&mut self, symbol: char) -> &mut Cell {
        self.symbol = symbol;
        self
    }

    pub fn set_fg(&mut self, color: Color) -> &mut Cell {
        self.fg = color;
        self
    }

    pub fn set_bg(&mut self, color: Color) -> &mut Cell {
        self.bg = color;
        self
    }

    pub fn set_style(&mut self, style: Style) -> &mut Cell {
        if let Some(c) = style.fg {
            self.fg = c;
        }
        if let Some(c) = style.bg {
            self.bg = c;
        }
        self
    }

    pub fn style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn reset(&mut self) {
        *self = Cell::default();
    }

    pub fn is_blank(&self) -> bool {
        self.symbol == ' ' && self.bg == Color::Reset
    }
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            symbol: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_style_and_reset() {
        let mut c = Cell::default();
        assert!(c.is_blank());
        c.set_symbol('x').set_style(Style::default().fg(Color::Red));
        assert_eq!(c.fg, Color::Red);
        assert_eq!(c.bg, Color::Reset);
        assert!(!c.is_blank());
        c.reset();
        assert_eq!(c, Cell::default());
    }
}
