// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use crate::model::StringsModel;
use log::{info, warn};
use pixel_loop::{
    context::Context,
    event::{event_check, event_register},
    game::Render,
    render::{
        buffer::Buffer,
        stroke::{stroke_shape, Viewport},
        style::{Color, Style},
    },
    util::Rect,
};

pub struct StringsRender {
    pub cols: u16,
    pub rows: u16,
    pub viewport: Viewport,
    /// drawn this frame
    pub current: Buffer,
    /// what the screen shows
    pub previous: Buffer,
}

impl StringsRender {
    pub fn new(cols: u16, rows: u16) -> Self {
        event_register("Strings.Reroll", "clear");
        event_register("Strings.Resize", "resize");
        let area = Rect::new(0, 0, cols, rows);
        Self {
            cols,
            rows,
            viewport: Viewport::fit(1.0, 1.0, cols, rows),
            current: Buffer::empty(area),
            previous: Buffer::empty(area),
        }
    }

    /// Forces a full repaint on the next flush
    fn clear(&mut self) {
        self.current.reset();
        self.previous = Buffer::default();
    }

    fn fit(&mut self, m: &StringsModel) {
        let c = m.session.config();
        // the bottom row is the status line
        self.viewport = Viewport::fit(c.width, c.height, self.cols, self.rows.saturating_sub(1));
    }

    fn draw_status(&mut self, m: &StringsModel) {
        let c = m.session.config();
        let status = if m.msg.is_empty() {
            format!(
                "seed:{} pts:{} order:{} motion:{} smooth:{}  r s o m +/- p e q",
                c.seed, c.num_pts, c.order, c.motion, c.smooth
            )
        } else {
            m.msg.clone()
        };
        let y = self.rows.saturating_sub(1);
        self.current
            .set_str(0, y, status, Style::default().fg(Color::DarkGray));
    }
}

impl Render for StringsRender {
    type Model = StringsModel;

    fn init(&mut self, _ctx: &mut Context, m: &mut StringsModel) {
        self.fit(m);
        info!("strings render init {}x{}", self.cols, self.rows);
    }

    fn handle_event(&mut self, ctx: &mut Context, m: &mut StringsModel, _dt: f32) {
        if event_check("Strings.Resize", "resize") {
            let area = ctx.adapter.size();
            if area.area() > 0 {
                self.cols = area.width;
                self.rows = area.height;
            }
            self.current.resize(Rect::new(0, 0, self.cols, self.rows));
            self.fit(m);
            self.clear();
        }
        if event_check("Strings.Reroll", "clear") {
            self.fit(m);
            self.clear();
        }
    }

    fn draw(&mut self, ctx: &mut Context, m: &mut StringsModel, _dt: f32) {
        self.current.reset();
        stroke_shape(
            &mut self.current,
            &self.viewport,
            &m.shape,
            &m.session.config().presentation,
        );
        self.draw_status(m);
        if let Err(e) = ctx
            .adapter
            .draw_all_to_screen(&self.current, &self.previous, ctx.stage)
        {
            warn!("draw frame: {}", e);
        }
        std::mem::swap(&mut self.current, &mut self.previous);
        if self.current.area != self.previous.area {
            self.current = Buffer::empty(self.previous.area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_loop::{
        config::Configuration,
        event::Event,
        game::Game,
        render::adapter::headless::HeadlessAdapter,
    };

    #[test]
    fn test_headless_frames() {
        let m = StringsModel::new(Configuration {
            num_pts: 5,
            resolution: 10,
            ..Configuration::default()
        });
        let r = StringsRender::new(40, 20);
        let ad = HeadlessAdapter::new("strings", ".").with_script(vec![vec![Event::from('r')]], true);
        let ctx = Context::with_adapter("strings", ".", Box::new(ad));
        let mut g = Game::with_context(m, r, ctx);
        g.init(40, 20).unwrap();
        g.on_tick(0.016);
        g.on_tick(0.016);
        let ad = g
            .context
            .adapter
            .as_any()
            .downcast_mut::<HeadlessAdapter>()
            .unwrap();
        assert_eq!(ad.flushes, 2);
        assert!(ad.screen.content.iter().any(|c| !c.is_blank()));
        // status line shows the seed
        let status: String = (0..11).map(|x| ad.screen.get(x, 19).symbol).collect();
        assert_eq!(status, "seed:pixel ");
    }
}
