// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Trajectory assembler, turns per-point trajectories into per-time frames.

use crate::{
    config::Configuration,
    trajectory::{motion::PointTrajectory, smooth::smooth},
    util::{AnchorPoint, PointF64},
};
use serde::Serialize;

/// `resolution` frames, each the whole point set at one time sample.
/// Built once per generation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FrameTable {
    frames: Vec<Vec<AnchorPoint>>,
}

impl FrameTable {
    pub fn new(frames: Vec<Vec<AnchorPoint>>) -> Self {
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, t: usize) -> &[AnchorPoint] {
        &self.frames[t]
    }

    pub fn frames(&self) -> &[Vec<AnchorPoint>] {
        &self.frames
    }

    /// points per frame, the same for every frame
    pub fn points(&self) -> usize {
        self.frames.first().map_or(0, |f| f.len())
    }
}

fn sample_at(tr: &[PointF64], t: usize, fallback: PointF64) -> PointF64 {
    tr.get(t).copied().unwrap_or(fallback)
}

/// Frame t holds sample t of every anchor trajectory, with sample t of its
/// control point trajectories attached. Frames are smoothed one by one when
/// smoothing is on. A point whose trajectory is missing or short stands still.
pub fn assemble(
    points: &[AnchorPoint],
    trajectories: &[PointTrajectory],
    config: &Configuration,
) -> FrameTable {
    let empty = PointTrajectory::default();
    let frames = (0..config.frames())
        .map(|t| {
            let mut frame: Vec<AnchorPoint> = points
                .iter()
                .enumerate()
                .map(|(i, ap)| {
                    let tr = trajectories.get(i).unwrap_or(&empty);
                    AnchorPoint {
                        pt: sample_at(&tr.pt, t, ap.pt),
                        cp1: ap
                            .cp1
                            .map(|cp| tr.cp1.as_deref().map_or(cp, |c| sample_at(c, t, cp))),
                        cp2: ap
                            .cp2
                            .map(|cp| tr.cp2.as_deref().map_or(cp, |c| sample_at(c, t, cp))),
                    }
                })
                .collect();
            if config.smooth {
                smooth(&mut frame);
            }
            frame
        })
        .collect();
    FrameTable::new(frames)
}
