// RustPixel
// copyright zipxing@hotmail.com 2022~2024

use crate::{
    event::{Event, KeyCode, KeyEvent},
    render::{
        adapter::{to_error, Adapter, AdapterBase},
        buffer::Buffer,
        style::Color,
    },
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{Event as CEvent, KeyCode as CKeyCode, KeyEventKind},
    execute, queue,
    style::{Color as CColor, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use log::warn;
use std::any::Any;
use std::io::{self, Write};
use std::time::Duration;

pub struct CrosstermAdapter {
    pub writer: Box<dyn Write>,
    pub base: AdapterBase,
    raw: bool,
}

impl CrosstermAdapter {
    pub fn new(gn: &str, project_path: &str) -> Self {
        let stdout = io::stdout();
        Self {
            writer: Box::new(stdout),
            base: AdapterBase::new(gn, project_path),
            raw: false,
        }
    }
}

impl Adapter for CrosstermAdapter {
    fn init(&mut self, w: u16, h: u16, title: &str) -> Result<(), String> {
        self.set_size(w, h).set_title(title);
        // check terminal size, refuses to start if the size is smaller than the required size
        let (width, height) = terminal::size().map_err(|e| e.to_string())?;
        if w > width || h > height {
            return Err(format!(
                "Terminal too small! Render required size:(width: {}, height: {}) \
                Terminal size:(width : {}, height: {}).",
                w, h, width, height
            ));
        }
        enable_raw_mode().map_err(|e| e.to_string())?;
        self.raw = true;
        to_error(execute!(
            self.writer,
            EnterAlternateScreen,
            SetTitle(title),
            Clear(ClearType::All)
        ))?;
        self.hide_cursor()
    }

    fn get_base(&mut self) -> &mut AdapterBase {
        &mut self.base
    }

    fn reset(&mut self) {
        if !self.raw {
            return;
        }
        self.raw = false;
        if let Err(e) = disable_raw_mode() {
            warn!("disable raw mode: {}", e);
        }
        if let Err(e) = execute!(self.writer, LeaveAlternateScreen) {
            warn!("leave alternate screen: {}", e);
        }
        if let Err(e) = self.show_cursor() {
            warn!("show cursor: {}", e);
        }
    }

    fn hide_cursor(&mut self) -> Result<(), String> {
        to_error(execute!(self.writer, Hide))
    }

    fn show_cursor(&mut self) -> Result<(), String> {
        to_error(execute!(self.writer, Show))
    }

    fn poll_event(&mut self, timeout: Duration, es: &mut Vec<Event>) -> bool {
        let ready = match crossterm::event::poll(timeout) {
            Ok(r) => r,
            Err(e) => {
                warn!("poll terminal event: {}", e);
                return false;
            }
        };
        if !ready {
            return false;
        }
        let e = match crossterm::event::read() {
            Ok(e) => e,
            Err(e) => {
                warn!("read terminal event: {}", e);
                return false;
            }
        };
        if let Some(et) = input_events_from_cross(&e) {
            es.push(et);
        }
        if let CEvent::Key(key) = e {
            if key.kind == KeyEventKind::Press {
                if let CKeyCode::Char('q') = key.code {
                    return true;
                }
            }
        }
        false
    }

    fn draw_all_to_screen(
        &mut self,
        current_buffer: &Buffer,
        previous_buffer: &Buffer,
        _stage: u32,
    ) -> Result<(), String> {
        let updates = previous_buffer.diff(current_buffer);

        let mut fg = Color::Reset;
        let mut bg = Color::Reset;
        let mut last_pos: Option<(u16, u16)> = None;
        for (x, y, cell) in updates {
            // Move the cursor if the previous location was not (x - 1, y)
            if !matches!(last_pos, Some(p) if x == p.0 + 1 && y == p.1) {
                to_error(queue!(self.writer, MoveTo(x, y)))?;
            }
            last_pos = Some((x, y));
            if cell.fg != fg {
                let color = CColor::from(cell.fg);
                to_error(queue!(self.writer, SetForegroundColor(color)))?;
                fg = cell.fg;
            }
            if cell.bg != bg {
                let color = CColor::from(cell.bg);
                to_error(queue!(self.writer, SetBackgroundColor(color)))?;
                bg = cell.bg;
            }

            to_error(queue!(self.writer, Print(cell.symbol)))?;
        }
        to_error(queue!(
            self.writer,
            SetForegroundColor(CColor::Reset),
            SetBackgroundColor(CColor::Reset)
        ))?;
        to_error(self.writer.flush())
    }

    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}

/// Convert crossterm I/O events to unified events
pub fn input_events_from_cross(e: &CEvent) -> Option<Event> {
    match e {
        CEvent::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            let kc = match key.code {
                CKeyCode::Char(cc) => KeyCode::Char(cc),
                CKeyCode::Up => KeyCode::Up,
                CKeyCode::Down => KeyCode::Down,
                CKeyCode::Left => KeyCode::Left,
                CKeyCode::Right => KeyCode::Right,
                CKeyCode::Tab => KeyCode::Tab,
                CKeyCode::Esc => KeyCode::Esc,
                _ => {
                    return None;
                }
            };
            Some(Event::Key(KeyEvent::new(kc)))
        }
        CEvent::Resize(w, h) => Some(Event::Resize(*w, *h)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent as CKeyEvent, KeyModifiers};

    #[test]
    fn test_convert_events() {
        let k = CEvent::Key(CKeyEvent::new(CKeyCode::Char('r'), KeyModifiers::NONE));
        assert_eq!(input_events_from_cross(&k), Some(Event::from('r')));
        let k = CEvent::Key(CKeyEvent::new(CKeyCode::F(1), KeyModifiers::NONE));
        assert_eq!(input_events_from_cross(&k), None);
        assert_eq!(
            input_events_from_cross(&CEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        );
    }
}
