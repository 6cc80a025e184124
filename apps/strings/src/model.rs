// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use log::{info, warn};
use pixel_loop::{
    config::Configuration,
    context::Context,
    event::{event_emit, Event, KeyCode, KeyEvent},
    game::Model,
    session::{Session, TickHandle},
    util::AnchorPoint,
};

pub const MIN_PTS: usize = 3;
pub const MAX_PTS: usize = 24;

pub struct StringsModel {
    pub session: Session,
    pub handle: TickHandle,
    /// what the render strokes this frame
    pub shape: Vec<AnchorPoint>,
    /// milliseconds since the game started
    pub now_ms: f64,
    /// one-line status shown under the shape
    pub msg: String,
}

impl StringsModel {
    pub fn new(config: Configuration) -> Self {
        let session = Session::new(config);
        let handle = session.schedule();
        Self {
            session,
            handle,
            shape: vec![],
            now_ms: 0.0,
            msg: String::new(),
        }
    }

    /// Picks up the stream of a freshly generated frame table
    fn restart(&mut self) {
        self.handle = self.session.schedule();
        self.msg.clear();
        event_emit("Strings.Reroll");
    }

    fn update_config(&mut self, f: impl FnOnce(&mut Configuration)) {
        let mut config = self.session.config().clone();
        f(&mut config);
        if self.session.set_config(config) {
            self.restart();
        }
    }

    pub fn act(&mut self, code: KeyCode, ctx: &mut Context) {
        match code {
            KeyCode::Char('r') => {
                self.session.reroll(ctx.rand.rand64().into());
                self.restart();
            }
            KeyCode::Char('s') => self.update_config(|c| c.smooth = !c.smooth),
            KeyCode::Char('o') => self.update_config(|c| c.order = c.order.next()),
            KeyCode::Char('m') => self.update_config(|c| c.motion = c.motion.toggle()),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                self.update_config(|c| c.num_pts = (c.num_pts + 1).min(MAX_PTS))
            }
            KeyCode::Char('-') | KeyCode::Down => {
                self.update_config(|c| c.num_pts = c.num_pts.saturating_sub(1).max(MIN_PTS))
            }
            KeyCode::Char('p') => {
                let mut p = self.session.config().presentation.clone();
                p.show_points = !p.show_points;
                self.session.set_presentation(p);
            }
            KeyCode::Char('e') => {
                let path = format!("strings-{}.json", self.session.config().seed);
                self.msg = match self.session.export_json(&path, 200) {
                    Ok(()) => format!("exported {}", path),
                    Err(e) => {
                        warn!("export failed: {}", e);
                        format!("export failed: {}", e)
                    }
                };
            }
            _ => {}
        }
    }
}

impl Model for StringsModel {
    fn init(&mut self, ctx: &mut Context) {
        ctx.rand.srand(self.session.config().seed.value());
        info!(
            "strings model init, {} points, {} frames",
            self.session.points().len(),
            self.session.frames().len()
        );
        event_emit("Strings.Reroll");
    }

    fn handle_event(&mut self, _ctx: &mut Context, _dt: f32) {}

    fn handle_input(&mut self, ctx: &mut Context, _dt: f32) {
        let es = std::mem::take(&mut ctx.input_events);
        for e in es.iter() {
            match e {
                Event::Key(KeyEvent { code }) => self.act(*code, ctx),
                Event::Resize(w, h) => {
                    info!("terminal resized to {}x{}", w, h);
                    let base = ctx.adapter.get_base();
                    base.cell_w = *w;
                    base.cell_h = *h;
                    event_emit("Strings.Resize");
                }
            }
        }
    }

    fn handle_auto(&mut self, _ctx: &mut Context, dt: f32) {
        self.now_ms += dt as f64 * 1000.0;
        match self.session.tick(self.handle, self.now_ms) {
            Some(shape) => self.shape = shape,
            None => {
                warn!("stale tick handle, rescheduling");
                self.handle = self.session.schedule();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_loop::{config::CurveOrder, render::adapter::headless::HeadlessAdapter};

    fn ctx_with(keys: &str) -> Context {
        let mut ctx =
            Context::with_adapter("strings", ".", Box::new(HeadlessAdapter::new("strings", ".")));
        ctx.input_events = keys.chars().map(Event::from).collect();
        ctx
    }

    fn model() -> StringsModel {
        StringsModel::new(Configuration {
            num_pts: 5,
            resolution: 20,
            ..Configuration::default()
        })
    }

    #[test]
    fn test_keys_regenerate() {
        let mut m = model();
        let mut ctx = ctx_with("so++");
        m.init(&mut ctx);
        let first = m.handle;
        m.handle_input(&mut ctx, 0.0);
        let c = m.session.config();
        assert!(c.smooth);
        assert_eq!(c.order, CurveOrder::Quadratic);
        assert_eq!(c.num_pts, 7);
        assert_ne!(m.handle, first);
        assert!(m.session.is_current(m.handle));
        assert!(ctx.input_events.is_empty());
    }

    #[test]
    fn test_reroll_is_reproducible() {
        let mut a = model();
        let mut b = model();
        let (mut ca, mut cb) = (ctx_with("rr"), ctx_with("rr"));
        a.init(&mut ca);
        b.init(&mut cb);
        a.handle_input(&mut ca, 0.0);
        b.handle_input(&mut cb, 0.0);
        assert_eq!(a.session.config().seed, b.session.config().seed);
        assert_eq!(a.session.points(), b.session.points());
    }

    #[test]
    fn test_auto_ticks_shape() {
        let mut m = model();
        let mut ctx = ctx_with("");
        m.init(&mut ctx);
        m.handle_auto(&mut ctx, 0.016);
        assert_eq!(m.shape.len(), 5);
        assert!(m.session.clock().start.is_some());
        // points bounded by the limits
        let mut ctx = ctx_with(&"-".repeat(10));
        m.handle_input(&mut ctx, 0.0);
        assert_eq!(m.session.config().num_pts, MIN_PTS);
    }
}
