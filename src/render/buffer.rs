// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Buffer is the basic rendering surface, it represents a rectangle area.
//! A buffer comprises a cell vector with width * height elements.
//! A cell stores a symbol with its fg and bg colors.
//!
//! Adapters flush only the cells that changed between two buffers,
//! see `Buffer::diff`.

use crate::{
    render::cell::Cell,
    render::style::Style,
    util::{
        shape::{line, LineSym},
        Rect,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Buffer {
    pub area: Rect,
    pub content: Vec<Cell>,
}

impl Buffer {
    pub fn empty(area: Rect) -> Buffer {
        let cell: Cell = Default::default();
        Buffer::filled(area, &cell)
    }

    pub fn filled(area: Rect, cell: &Cell) -> Buffer {
        Buffer {
            area,
            content: vec![*cell; area.area()],
        }
    }

    pub fn content(&self) -> &[Cell] {
        &self.content
    }

    pub fn area(&self) -> &Rect {
        &self.area
    }

    pub fn get(&self, x: u16, y: u16) -> &Cell {
        let i = self.index_of(x, y);
        &self.content[i]
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> &mut Cell {
        let i = self.index_of(x, y);
        &mut self.content[i]
    }

    /// Index of an absolute position, panics outside the area
    pub fn index_of(&self, x: u16, y: u16) -> usize {
        debug_assert!(
            x >= self.area.left()
                && x < self.area.right()
                && y >= self.area.top()
                && y < self.area.bottom(),
            "Trying to access position outside the buffer: x={}, y={}, area={:?}",
            x,
            y,
            self.area
        );
        ((y - self.area.y) as usize) * self.area.width as usize + (x - self.area.x) as usize
    }

    pub fn pos_of(&self, i: usize) -> (u16, u16) {
        debug_assert!(
            i < self.content.len(),
            "Trying to get the coords of a cell outside the buffer: i={} len={}",
            i,
            self.content.len()
        );
        (
            self.area.x + (i % self.area.width as usize) as u16,
            self.area.y + (i / self.area.width as usize) as u16,
        )
    }

    /// Sets one cell at a position relative to the area, clipped silently
    pub fn set_char(&mut self, x: i32, y: i32, symbol: char, style: Style) {
        if x < 0 || y < 0 || x >= self.area.width as i32 || y >= self.area.height as i32 {
            return;
        }
        let i = y as usize * self.area.width as usize + x as usize;
        self.content[i].set_symbol(symbol).set_style(style);
    }

    pub fn set_str<S>(&mut self, x: u16, y: u16, string: S, style: Style)
    where
        S: AsRef<str>,
    {
        for (k, ch) in string.as_ref().chars().enumerate() {
            self.set_char(x as i32 + k as i32, y as i32, ch, style);
        }
    }

    /// Draws a line with directional symbols, or `symbol` when given.
    /// `dash` holds alternating on/off run lengths, `phase` is the running
    /// cell count carried over from previous lines of the same path.
    /// Returns the phase after this line.
    pub fn draw_line(
        &mut self,
        p0: (i32, i32),
        p1: (i32, i32),
        symbol: Option<char>,
        dash: &[u16],
        phase: usize,
        style: Style,
    ) -> usize {
        let mut phase = phase;
        for (k, (x, y, sym)) in line(p0.0, p0.1, p1.0, p1.1).into_iter().enumerate() {
            // the first point repeats the end of the previous line
            if k == 0 && phase > 0 {
                continue;
            }
            if dash_on(dash, phase) {
                let ch = symbol.unwrap_or(if sym == LineSym::Start {
                    '.'
                } else {
                    sym.symbol()
                });
                self.set_char(x, y, ch, style);
            }
            phase += 1;
        }
        phase
    }

    pub fn resize(&mut self, area: Rect) {
        let length = area.area();
        if self.content.len() > length {
            self.content.truncate(length);
        } else {
            self.content.resize(length, Default::default());
        }
        self.area = area;
    }

    pub fn reset(&mut self) {
        for c in &mut self.content {
            c.reset();
        }
    }

    /// Builds a minimal sequence of coordinates and Cells necessary to update the UI from
    /// self to other.
    pub fn diff<'a>(&self, other: &'a Buffer) -> Vec<(u16, u16, &'a Cell)> {
        let width = other.area.width as usize;
        if self.area != other.area {
            return other
                .content
                .iter()
                .enumerate()
                .map(|(i, c)| ((i % width) as u16, (i / width) as u16, c))
                .collect();
        }
        other
            .content
            .iter()
            .zip(self.content.iter())
            .enumerate()
            .filter(|(_, (current, previous))| current != previous)
            .map(|(i, (current, _))| ((i % width) as u16, (i / width) as u16, current))
            .collect()
    }
}

/// Whether cell number `phase` of a dashed stroke is drawn
pub fn dash_on(dash: &[u16], phase: usize) -> bool {
    let period: usize = dash.iter().map(|d| *d as usize).sum();
    if period == 0 {
        return true;
    }
    let mut pos = phase % period;
    for (k, run) in dash.iter().enumerate() {
        let run = *run as usize;
        if pos < run {
            return k % 2 == 0;
        }
        pos -= run;
    }
    true
}
