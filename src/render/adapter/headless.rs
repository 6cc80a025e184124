// RustPixel
// copyright zipxing@hotmail.com 2022~2024

//! An adapter without a device. Input comes from a script, frames are
//! applied to an in-memory screen, which makes the whole game loop testable.

use crate::{
    event::Event,
    render::{
        adapter::{Adapter, AdapterBase},
        buffer::Buffer,
    },
    util::Rect,
};
use std::{any::Any, collections::VecDeque, time::Duration};

pub struct HeadlessAdapter {
    pub base: AdapterBase,
    /// input delivered one batch per poll
    pub script: VecDeque<Vec<Event>>,
    /// request exit once the script runs out
    pub quit_when_done: bool,
    /// what a device would currently show
    pub screen: Buffer,
    /// number of draw calls
    pub flushes: usize,
    /// cells written by the last draw call
    pub last_updates: usize,
}

impl HeadlessAdapter {
    pub fn new(gn: &str, project_path: &str) -> Self {
        Self {
            base: AdapterBase::new(gn, project_path),
            script: VecDeque::new(),
            quit_when_done: false,
            screen: Buffer::default(),
            flushes: 0,
            last_updates: 0,
        }
    }

    pub fn with_script(mut self, script: Vec<Vec<Event>>, quit_when_done: bool) -> Self {
        self.script = script.into();
        self.quit_when_done = quit_when_done;
        self
    }
}

impl Adapter for HeadlessAdapter {
    fn init(&mut self, w: u16, h: u16, title: &str) -> Result<(), String> {
        self.set_size(w, h).set_title(title);
        self.screen = Buffer::empty(Rect::new(0, 0, w, h));
        Ok(())
    }

    fn reset(&mut self) {
        self.script.clear();
    }

    fn get_base(&mut self) -> &mut AdapterBase {
        &mut self.base
    }

    fn poll_event(&mut self, timeout: Duration, ev: &mut Vec<Event>) -> bool {
        match self.script.pop_front() {
            Some(batch) => {
                ev.extend(batch);
                // a frame period passes as it would on a real device
                std::thread::sleep(timeout);
                false
            }
            None => {
                std::thread::sleep(timeout);
                self.quit_when_done
            }
        }
    }

    fn draw_all_to_screen(
        &mut self,
        current_buffer: &Buffer,
        previous_buffer: &Buffer,
        _stage: u32,
    ) -> Result<(), String> {
        if self.screen.area != current_buffer.area {
            self.screen = Buffer::empty(current_buffer.area);
        }
        let updates = previous_buffer.diff(current_buffer);
        self.last_updates = updates.len();
        for (x, y, cell) in updates {
            *self.screen.get_mut(x, y) = *cell;
        }
        self.flushes += 1;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::style::Style;

    #[test]
    fn test_script_and_quit() {
        let mut ad = HeadlessAdapter::new("t", ".").with_script(vec![vec![Event::from('r')]], true);
        let mut ev = vec![];
        assert!(!ad.poll_event(Duration::ZERO, &mut ev));
        assert_eq!(ev, vec![Event::from('r')]);
        assert!(ad.poll_event(Duration::ZERO, &mut ev));
    }

    #[test]
    fn test_draw_applies_diff() {
        let mut ad = HeadlessAdapter::new("t", ".");
        ad.init(4, 2, "t").unwrap();
        let prev = Buffer::empty(Rect::new(0, 0, 4, 2));
        let mut cur = prev.clone();
        cur.set_char(3, 1, '*', Style::default());
        ad.draw_all_to_screen(&cur, &prev, 0).unwrap();
        assert_eq!(ad.last_updates, 1);
        assert_eq!(ad.screen, cur);
        assert_eq!(ad.size(), Rect::new(0, 0, 4, 2));
    }
}
