// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Point set initializer.
//!
//! Anchors are drawn one at a time inside the centered `size` x `size`
//! sub-rectangle of the canvas, and the working set is replaced by its convex
//! hull after every draw until it holds `numPts` points. Control points are
//! then attached by rejection sampling against the curvature bounds.

use crate::{
    algorithm::convex_hull,
    config::{Configuration, CurveOrder},
    util::{AnchorPoint, PointF64, Rand},
};
use log::{debug, warn};

/// draws per requested anchor before hull reduction is given up
pub const HULL_ATTEMPTS_PER_POINT: usize = 1000;
/// draws per control point before the distance bounds are given up
pub const CURVATURE_ATTEMPTS: usize = 1000;

/// Builds the anchor point set of a new shape from `rand`, which the caller
/// has seeded. Linear shapes carry no control points, quadratic ones `cp1`,
/// cubic ones `cp1` and `cp2`.
pub fn initialize(config: &Configuration, rand: &mut Rand) -> Vec<AnchorPoint> {
    let mut pts: Vec<AnchorPoint> = place_anchors(config, rand)
        .into_iter()
        .map(AnchorPoint::from_point)
        .collect();
    if config.order == CurveOrder::Linear {
        return pts;
    }
    for ap in pts.iter_mut() {
        ap.cp1 = Some(control_point(ap.pt, config, rand));
        if config.order == CurveOrder::Cubic {
            ap.cp2 = Some(control_point(ap.pt, config, rand));
        }
    }
    pts
}

/// Anchor positions only. Convex unless the attempt budget ran out, in which
/// case the remaining points are accepted wherever they land.
pub fn place_anchors(config: &Configuration, rand: &mut Rand) -> Vec<PointF64> {
    let (w, h, size) = (config.width, config.height, config.size);
    let offset_w = (1.0 - size) * w / 2.0;
    let offset_h = (1.0 - size) * h / 2.0;
    let budget = config.num_pts.saturating_mul(HULL_ATTEMPTS_PER_POINT);

    let mut working: Vec<PointF64> = Vec::with_capacity(config.num_pts + 1);
    let mut attempts = 0usize;
    while working.len() < config.num_pts {
        working.push(PointF64::new(
            offset_w + rand.unit() * w * size,
            offset_h + rand.unit() * h * size,
        ));
        attempts += 1;
        if attempts > budget {
            continue;
        }
        working = convex_hull(&working);
        if attempts == budget && working.len() < config.num_pts {
            warn!(
                "hull stuck at {}/{} points after {} draws, accepting non-convex points",
                working.len(),
                config.num_pts,
                attempts
            );
        }
    }
    debug!("placed {} anchors in {} draws", working.len(), attempts);
    working
}

fn draw_on_canvas(config: &Configuration, rand: &mut Rand) -> PointF64 {
    PointF64::new(rand.unit() * config.width, rand.unit() * config.height)
}

/// A control point for `anchor`, strictly between the curvature bounds.
/// Inverted bounds disable the check and the first draw is taken.
fn control_point(anchor: PointF64, config: &Configuration, rand: &mut Rand) -> PointF64 {
    let ext = config.max_extent();
    let (lo, hi) = (config.min_curvature * ext, config.max_curvature * ext);
    let mut cp = draw_on_canvas(config, rand);
    if lo > hi {
        return cp;
    }
    let mut attempts = 1;
    loop {
        let d = cp.dist(anchor);
        if lo < d && d < hi {
            return cp;
        }
        if attempts >= CURVATURE_ATTEMPTS {
            warn!(
                "no control point within ({}, {}) of {:?} after {} draws",
                lo, hi, anchor, attempts
            );
            return cp;
        }
        cp = draw_on_canvas(config, rand);
        attempts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::is_convex_polygon;

    fn config(order: CurveOrder, num_pts: usize) -> Configuration {
        Configuration {
            order,
            num_pts,
            ..Configuration::default()
        }
    }

    #[test]
    fn test_anchor_count_and_region() {
        let cfg = config(CurveOrder::Linear, 7);
        let pts = initialize(&cfg, &mut Rand::with_seed(3));
        assert_eq!(pts.len(), 7);
        for ap in &pts {
            assert!((250.0..750.0).contains(&ap.pt.x));
            assert!((250.0..750.0).contains(&ap.pt.y));
            assert_eq!(ap.control_count(), 0);
        }
        let anchors: Vec<PointF64> = pts.iter().map(|a| a.pt).collect();
        assert!(is_convex_polygon(&anchors));
    }

    #[test]
    fn test_control_points_per_order() {
        let q = initialize(&config(CurveOrder::Quadratic, 5), &mut Rand::with_seed(1));
        assert!(q.iter().all(|a| a.cp1.is_some() && a.cp2.is_none()));
        let c = initialize(&config(CurveOrder::Cubic, 5), &mut Rand::with_seed(1));
        assert!(c.iter().all(|a| a.control_count() == 2));
        // same seed, same anchors whatever the order
        for (a, b) in q.iter().zip(c.iter()) {
            assert_eq!(a.pt, b.pt);
        }
    }

    #[test]
    fn test_degenerate_sizes_terminate() {
        // every draw lands on the same spot, the hull never grows past one point
        let cfg = Configuration {
            size: 0.0,
            num_pts: 3,
            ..Configuration::default()
        };
        let pts = place_anchors(&cfg, &mut Rand::with_seed(9));
        assert_eq!(pts.len(), 3);
        assert!(pts.iter().all(|p| *p == PointF64::new(500.0, 500.0)));

        let none = place_anchors(&config(CurveOrder::Linear, 0), &mut Rand::with_seed(9));
        assert!(none.is_empty());
        let two = place_anchors(&config(CurveOrder::Linear, 2), &mut Rand::with_seed(9));
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn test_unreachable_bounds_terminate() {
        // no point on the canvas is that far from an anchor
        let cfg = Configuration {
            order: CurveOrder::Quadratic,
            num_pts: 3,
            min_curvature: 5.0,
            max_curvature: 6.0,
            ..Configuration::default()
        };
        let pts = initialize(&cfg, &mut Rand::with_seed(2));
        assert_eq!(pts.len(), 3);
        assert!(pts.iter().all(|a| a.cp1.is_some()));
    }
}
