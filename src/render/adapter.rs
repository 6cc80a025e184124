// RustPixel
// copyright zipxing@hotmail.com 2022~2024

//! # Render Adapter Module
//!
//! Adapters hide the concrete output device behind one trait, so the game
//! loop, the model and the render never talk to a terminal directly.
//!
//! - **Crossterm**: terminal text-mode rendering (feature `crossterm`)
//! - **Headless**: keeps frames in memory, replays scripted input
//!
//! ```text
//! ┌─────────────┐        ┌─────────────┐
//! │   Model     │◄──────►│   Render    │
//! │  (Session)  │ Events │  (Buffers)  │
//! └─────────────┘        └─────────────┘
//!                               │
//!                               ▼
//!                   ┌──────────────────────┐
//!                   │  Adapter Interface   │
//!                   │ Crossterm │ Headless │
//!                   └──────────────────────┘
//! ```
//!
//! A frame is flushed as the cell diff between the previous and the current
//! buffer, see `Buffer::diff`.

use crate::{event::Event, render::buffer::Buffer, util::Rect};
use std::{any::Any, io, time::Duration};

#[cfg(feature = "crossterm")]
pub mod cross;
pub mod headless;

/// Converts an io result of a queued terminal command into the adapter error type
pub fn to_error(r: io::Result<()>) -> Result<(), String> {
    r.map_err(|e| e.to_string())
}

/// Data shared by every adapter
pub struct AdapterBase {
    pub game_name: String,
    pub project_path: String,
    pub title: String,
    /// logical width in cells
    pub cell_w: u16,
    /// logical height in cells
    pub cell_h: u16,
}

impl AdapterBase {
    pub fn new(gn: &str, project_path: &str) -> Self {
        Self {
            game_name: gn.to_string(),
            project_path: project_path.to_string(),
            title: "".to_string(),
            cell_w: 0,
            cell_h: 0,
        }
    }
}

/// Adapter Interface Definition
///
/// Every output device implements these methods. Game logic stays decoupled
/// from the concrete backend.
pub trait Adapter {
    /// Prepares the device for a `w` x `h` cell surface.
    /// Fails when the device cannot hold that surface.
    fn init(&mut self, w: u16, h: u16, title: &str) -> Result<(), String>;

    /// Restores the device to the state found before `init`
    fn reset(&mut self);

    fn get_base(&mut self) -> &mut AdapterBase;

    /// Waits at most `timeout` for input and appends it to `ev`.
    /// Returns true if the application should exit.
    fn poll_event(&mut self, timeout: Duration, ev: &mut Vec<Event>) -> bool;

    /// Flushes one frame. `previous_buffer` is what the device currently shows.
    fn draw_all_to_screen(
        &mut self,
        current_buffer: &Buffer,
        previous_buffer: &Buffer,
        stage: u32,
    ) -> Result<(), String>;

    fn set_size(&mut self, w: u16, h: u16) -> &mut Self
    where
        Self: Sized,
    {
        let bs = self.get_base();
        bs.cell_w = w;
        bs.cell_h = h;
        self
    }

    fn set_title(&mut self, s: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.get_base().title = s.to_string();
        self
    }

    /// Get current logical grid size
    fn size(&mut self) -> Rect {
        let bs = self.get_base();
        Rect::new(0, 0, bs.cell_w, bs.cell_h)
    }

    fn hide_cursor(&mut self) -> Result<(), String>;
    fn show_cursor(&mut self) -> Result<(), String>;

    fn as_any(&mut self) -> &mut dyn Any;
}
