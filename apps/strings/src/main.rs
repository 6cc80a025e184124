// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! strings, a seeded looping bezier shape in the terminal.
//!
//! cargo run -p strings -- --seed hello --order cubic --smooth true
//! cargo run -p strings -- --config apps/strings/strings.toml
//! cargo run -p strings -- --seed hello --export out/hello.json

mod model;
mod render_terminal;

use crate::{model::StringsModel, render_terminal::StringsRender};
use clap::Parser;
use log::{info, LevelFilter};
use pixel_loop::{
    config::{Configuration, CurveOrder, MotionStyle, Seed},
    game::Game,
    log::init_log,
    session::Session,
    util::get_loop_root_path,
};
use std::{error::Error, path::MAIN_SEPARATOR, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "strings", version, about = "Seeded looping bezier shapes in the terminal")]
struct Args {
    /// TOML configuration, command line values override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// numbers are used as is, any other text is hashed
    #[arg(short, long)]
    seed: Option<Seed>,
    #[arg(short = 'n', long)]
    num_pts: Option<usize>,
    /// linear, quadratic, cubic or 1..3
    #[arg(short, long)]
    order: Option<CurveOrder>,
    /// seconds per loop
    #[arg(short, long)]
    duration: Option<f64>,
    /// frames per loop
    #[arg(short, long)]
    resolution: Option<usize>,
    /// true or false, overrides the config file either way
    #[arg(long)]
    smooth: Option<bool>,
    /// round_trip or two_leg
    #[arg(short, long)]
    motion: Option<MotionStyle>,
    /// write one sampled loop as JSON and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
    /// samples per exported loop
    #[arg(long, default_value_t = 200)]
    samples: usize,
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
    #[arg(long, default_value_t = 80)]
    cols: u16,
    #[arg(long, default_value_t = 30)]
    rows: u16,
}

fn load_config(args: &Args) -> Result<Configuration, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => Configuration::load(path)?,
        None => Configuration::default(),
    };
    if let Some(seed) = &args.seed {
        config.seed = seed.clone();
    }
    if let Some(n) = args.num_pts {
        config.num_pts = n;
    }
    if let Some(o) = args.order {
        config.order = o;
    }
    if let Some(d) = args.duration {
        config.duration = d;
    }
    if let Some(r) = args.resolution {
        config.resolution = r;
    }
    if let Some(smooth) = args.smooth {
        config.smooth = smooth;
    }
    if let Some(m) = args.motion {
        config.motion = m;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    if let Err(e) = init_log(
        args.log_level,
        &format!("log{}strings.log", MAIN_SEPARATOR),
    ) {
        eprintln!("running without file log: {}", e);
    }
    let config = load_config(&args)?;
    info!("strings start, config {:?}", config);

    if let Some(path) = &args.export {
        let session = Session::new(config);
        session.export_json(path, args.samples)?;
        println!("exported {} samples to {}", args.samples, path.display());
        return Ok(());
    }

    let m = StringsModel::new(config);
    let r = StringsRender::new(args.cols, args.rows);
    let mut g = Game::new(m, r, "strings", &get_loop_root_path());
    if let Err(e) = g.init(args.cols, args.rows) {
        g.context.adapter.reset();
        return Err(e.into());
    }
    g.run()?;
    Ok(())
}
