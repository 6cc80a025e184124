// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Loop trajectory engine.
//!
//! ```text
//! initialize ──► smooth ──► sample_trajectories ──► assemble ──► tick
//!  (anchors +    (cp1s)      (one closed path per    (frame      (per render
//!   controls)                 tracked point)          table)      frame)
//! ```
//!
//! All randomness of one generation comes from a single `Rand` seeded with
//! the configured seed, consumed in a fixed order, so a seed and a
//! configuration always reproduce the same shape and motion.

pub mod assemble;
pub mod init;
pub mod motion;
pub mod playback;
pub mod smooth;

pub use assemble::{assemble, FrameTable};
pub use init::initialize;
pub use motion::{sample_motion, sample_trajectories, PointTrajectory, Trajectory};
pub use playback::{frame_position, interpolate, tick, AnimationClock, FramePosition};
pub use smooth::smooth;

use crate::{
    config::Configuration,
    util::{AnchorPoint, Rand},
};
use log::info;

/// Output of one full generation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Generation {
    /// the initialized shape, before per-frame smoothing; frame 0 of
    /// `frames` is the shape rendered at time zero
    pub points: Vec<AnchorPoint>,
    pub frames: FrameTable,
}

/// Runs initializer, smoother, sampler and assembler for `config`
pub fn generate(config: &Configuration) -> Generation {
    let mut rand = Rand::with_seed(config.seed.value());
    let mut points = initialize(config, &mut rand);
    if config.smooth {
        smooth(&mut points);
    }
    let trajectories = sample_trajectories(&points, config, &mut rand);
    let frames = assemble(&points, &trajectories, config);
    info!(
        "generated seed={} pts={} order={} motion={} frames={}",
        config.seed,
        points.len(),
        config.order,
        config.motion,
        frames.len()
    );
    Generation { points, frames }
}
