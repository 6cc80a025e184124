// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Motion sequence sampler.
//!
//! Every tracked point (an anchor, or one of its control points) travels a
//! closed bezier path that leaves it and comes back to it. The path is
//! sampled at `resolution` parameters in [0, 1), so sample 0 is the point
//! itself and the sample after the last one is the point again.

use crate::{
    algorithm::{continue_curve, control_polygon, draw_bezier_curves},
    config::{Configuration, MotionStyle},
    util::{AnchorPoint, PointF64, Rand},
};

/// Samples of one tracked point over one loop
pub type Trajectory = Vec<PointF64>;

/// Trajectories of one anchor and its control points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointTrajectory {
    pub pt: Trajectory,
    pub cp1: Option<Trajectory>,
    pub cp2: Option<Trajectory>,
}

fn offset(p: PointF64, extent: f64, rand: &mut Rand) -> PointF64 {
    let dx = rand.spread(extent);
    let dy = rand.spread(extent);
    p + PointF64::new(dx, dy)
}

/// Closed path of `start` with the configured motion style
pub fn sample_motion(start: PointF64, config: &Configuration, rand: &mut Rand) -> Trajectory {
    match config.motion {
        MotionStyle::RoundTrip => round_trip(start, config, rand),
        MotionStyle::TwoLeg => two_leg(start, config, rand),
    }
}

/// One curve from `start` back to a copy of it, shaped by two fresh
/// control points within `speed * maxExtent` on each axis.
pub fn round_trip(start: PointF64, config: &Configuration, rand: &mut Rand) -> Trajectory {
    let extent = config.speed * config.max_extent();
    let from = AnchorPoint::from_point(start);
    let mut back = from;
    back.cp1 = Some(offset(start, extent, rand));
    back.cp2 = Some(offset(start, extent, rand));

    let mut out = vec![PointF64::default(); config.frames()];
    draw_bezier_curves(&control_polygon(&from, &back), &mut out);
    out
}

/// Out to a nearby point and back. The return leg leaves the turning point
/// along the tangent the outbound leg arrived with. The first half of the
/// samples covers the outbound leg.
pub fn two_leg(start: PointF64, config: &Configuration, rand: &mut Rand) -> Trajectory {
    let extent = config.speed * config.max_extent();
    let from = AnchorPoint::from_point(start);

    let mut out_pt = AnchorPoint::from_point(offset(start, extent, rand));
    out_pt.cp1 = Some(offset(start, extent, rand));
    out_pt.cp2 = Some(offset(out_pt.pt, extent, rand));

    let mut back = from;
    back.cp1 = Some(continue_curve(&from, &out_pt, 1.0));
    back.cp2 = Some(offset(start, extent, rand));

    let res = config.frames();
    let h1 = res.div_ceil(2);
    let mut out = vec![PointF64::default(); res];
    let (first, second) = out.split_at_mut(h1);
    draw_bezier_curves(&control_polygon(&from, &out_pt), first);
    if !second.is_empty() {
        draw_bezier_curves(&control_polygon(&out_pt, &back), second);
    }
    out
}

/// Samples every tracked point of `points`: all anchors first, then every
/// `cp1`, then every `cp2`, so the random stream is consumed in a fixed order.
pub fn sample_trajectories(
    points: &[AnchorPoint],
    config: &Configuration,
    rand: &mut Rand,
) -> Vec<PointTrajectory> {
    let mut trs: Vec<PointTrajectory> = points
        .iter()
        .map(|ap| PointTrajectory {
            pt: sample_motion(ap.pt, config, rand),
            ..PointTrajectory::default()
        })
        .collect();
    for (tr, ap) in trs.iter_mut().zip(points) {
        tr.cp1 = ap.cp1.map(|cp| sample_motion(cp, config, rand));
    }
    for (tr, ap) in trs.iter_mut().zip(points) {
        tr.cp2 = ap.cp2.map(|cp| sample_motion(cp, config, rand));
    }
    trs
}
