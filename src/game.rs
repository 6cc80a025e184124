// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Game encapsulates Model and Render classes and implements the main loop.
//! Be aware that all the Game, Model and Render instances have the same lifetime.
//!
//! # Example
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!    init_log(log::LevelFilter::Info, "log/strings.log")?;
//!    let m = StringsModel::new(config);
//!    let r = StringsRender::new();
//!    let mut g = Game::new(m, r, "strings", ".");
//!    g.init()?;
//!    g.run()?;
//!    Ok(())
//! }

use crate::{
    context::Context,
    error::{LoopError, LoopResult},
    GAME_FRAME,
};
use log::info;
use std::time::{Duration, Instant};

/// The Model interface, main entrance for data and core logic
pub trait Model {
    fn init(&mut self, ctx: &mut Context);
    fn update(&mut self, ctx: &mut Context, dt: f32) {
        self.handle_event(ctx, dt);
        self.handle_input(ctx, dt);
        self.handle_auto(ctx, dt);
    }
    fn handle_event(&mut self, ctx: &mut Context, dt: f32);
    fn handle_input(&mut self, ctx: &mut Context, dt: f32);
    fn handle_auto(&mut self, ctx: &mut Context, dt: f32);
}

/// The Render interface, takes context and model as input params. It renders every single frame
pub trait Render {
    type Model: Model;

    fn init(&mut self, ctx: &mut Context, m: &mut Self::Model);
    fn update(&mut self, ctx: &mut Context, m: &mut Self::Model, dt: f32) {
        self.handle_event(ctx, m, dt);
        self.draw(ctx, m, dt);
    }
    fn handle_event(&mut self, ctx: &mut Context, model: &mut Self::Model, dt: f32);
    fn draw(&mut self, ctx: &mut Context, model: &mut Self::Model, dt: f32);
}

/// Game encapsulates a Model，a Render and a Context structure
pub struct Game<M, R>
where
    M: Model,
    R: Render<Model = M>,
{
    pub context: Context,
    pub model: M,
    pub render: R,
}

impl<M, R> Game<M, R>
where
    M: Model,
    R: Render<Model = M>,
{
    /// Game on the default adapter of this build
    pub fn new(m: M, r: R, name: &str, project_path: &str) -> Self {
        Self::with_context(m, r, Context::new(name, project_path))
    }

    pub fn with_context(m: M, r: R, ctx: Context) -> Self {
        info!("{}(pixel_loop) start...{:?}", ctx.game_name, ctx.project_path);
        Self {
            context: ctx,
            model: m,
            render: r,
        }
    }

    /// Main loop, polling input events and calling tick at a constant
    /// framerate, executing the update method of model and render.
    /// The adapter is reset when the loop ends.
    pub fn run(&mut self) -> LoopResult<()> {
        info!("Begin run...");

        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_nanos(1_000_000_000 / GAME_FRAME as u64);

        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_nanos(100));

            if self
                .context
                .adapter
                .poll_event(timeout, &mut self.context.input_events)
            {
                info!("Exit run...");
                self.context.adapter.reset();
                return Ok(());
            }

            let et = last_tick.elapsed();

            if et >= tick_rate {
                let dt = et.as_secs() as f32 + et.subsec_nanos() as f32 / 1_000_000_000.0;
                self.on_tick(dt);
                last_tick = Instant::now();
            }
        }
    }

    /// calls every frame, updates model logic and does rendering
    pub fn on_tick(&mut self, dt: f32) {
        self.context.stage += 1;
        self.model.update(&mut self.context, dt);
        self.render.update(&mut self.context, &mut self.model, dt);
    }

    /// init model and render, then the adapter with the size the render asked for
    pub fn init(&mut self, w: u16, h: u16) -> LoopResult<()> {
        info!("Init game...");
        self.model.init(&mut self.context);
        self.render.init(&mut self.context, &mut self.model);
        let title = self.context.game_name.clone();
        self.context
            .adapter
            .init(w, h, &title)
            .map_err(LoopError::Render)
    }
}
