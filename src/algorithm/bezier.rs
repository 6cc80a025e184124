// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Bezier curve primitives for looping shape animations.
//!
//! A curve segment runs from a `start` anchor to an `end` anchor and is shaped
//! by the control points the `end` anchor carries, so a closed shape is drawn
//! by walking its anchors in order and wrapping back to the first one.
//! All functions here are pure.

use crate::util::{AnchorPoint, PointF64};

/// samples per curved segment when flattening a shape for drawing
pub const CURVE_STEPS: usize = 16;

/// De Casteljau evaluation over an arbitrary control polygon.
fn bezier_interpolation_func(t: f64, points: &[PointF64]) -> PointF64 {
    if points.is_empty() {
        return PointF64::default();
    }
    let mut tmp_points = points.to_vec();
    let count = tmp_points.len();
    for i in 1..count {
        for j in 0..(count - i) {
            tmp_points[j] = tmp_points[j].lerp(tmp_points[j + 1], t);
        }
    }
    tmp_points[0]
}

/// Control polygon of the segment entering `end`.
pub fn control_polygon(start: &AnchorPoint, end: &AnchorPoint) -> Vec<PointF64> {
    let mut poly = Vec::with_capacity(4);
    poly.push(start.pt);
    poly.extend(end.cp1);
    poly.extend(end.cp2);
    poly.push(end.pt);
    poly
}

/// Point at parameter `t` on the segment from `start` to `end`.
/// Linear, quadratic or cubic depending on what `end` carries.
pub fn point_on_curve(t: f64, start: &AnchorPoint, end: &AnchorPoint) -> PointF64 {
    bezier_interpolation_func(t, &control_polygon(start, end))
}

/// Samples `out_points.len()` evenly spaced parameters in [0, 1).
/// The end point itself is never produced, which is what lets a closed
/// curve be sampled without duplicating its seam.
pub fn draw_bezier_curves(points: &[PointF64], out_points: &mut [PointF64]) {
    let step = 1.0 / out_points.len() as f64;
    for (i, item) in out_points.iter_mut().enumerate() {
        *item = bezier_interpolation_func(i as f64 * step, points);
    }
}

/// Control point that continues the tangent of the segment entering `cur`
/// through `cur`, scaled by `t` (1 mirrors the incoming handle exactly).
/// The incoming handle is `cur.cp2`, else `cur.cp1`, else `prev` itself.
pub fn continue_curve(prev: &AnchorPoint, cur: &AnchorPoint, t: f64) -> PointF64 {
    let handle = cur.cp2.or(cur.cp1).unwrap_or(prev.pt);
    cur.pt + cur.pt.diff(handle) * t
}

/// Blends an anchor between two adjacent keyframes.
///
/// The anchor travels a quadratic from `cur` (t = 0) to `next` (t = 1)
/// whose control point continues the edge `prev -> cur` by half the step
/// length, so the sub-frame path bends with the shape outline instead of
/// cutting straight across. Control points keep their offset from the
/// anchor, blended between the two keyframes. When only one keyframe
/// carries a control point the other side stands in with the handle of a
/// straight segment: `prev` for cp1, the anchor for cp2.
pub fn transform_curve(
    t: f64,
    prev: &AnchorPoint,
    cur: &AnchorPoint,
    next: &AnchorPoint,
) -> AnchorPoint {
    let edge = cur.pt.dist(prev.pt);
    let step = next.pt.dist(cur.pt);
    let mut path_end = AnchorPoint::from_point(next.pt);
    if edge > 0.0 && step > 0.0 {
        let scale = 0.5 * step / edge;
        path_end.cp1 = Some(continue_curve(
            &AnchorPoint::from_point(prev.pt),
            &AnchorPoint::from_point(cur.pt),
            scale,
        ));
    }
    let pt = point_on_curve(t, &AnchorPoint::from_point(cur.pt), &path_end);
    let bend = pt - cur.pt.lerp(next.pt, t);
    let blend = |a: Option<PointF64>, b: Option<PointF64>, fa: PointF64, fb: PointF64| match (a, b)
    {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or(fa).lerp(b.unwrap_or(fb), t) + bend),
    };
    AnchorPoint {
        pt,
        cp1: blend(cur.cp1, next.cp1, prev.pt, prev.pt),
        cp2: blend(cur.cp2, next.cp2, cur.pt, next.pt),
    }
}

/// Flattens a closed anchor sequence into a polyline, `steps` samples per
/// segment. Segment i runs from anchor i-1 to anchor i.
pub fn flatten_closed(points: &[AnchorPoint], steps: usize) -> Vec<PointF64> {
    let n = points.len();
    let steps = steps.max(1);
    let mut out = Vec::with_capacity(n * steps + 1);
    for i in 0..n {
        let start = &points[(i + n - 1) % n];
        let end = &points[i];
        if end.control_count() == 0 {
            out.push(start.pt);
            continue;
        }
        let poly = control_polygon(start, end);
        let mut seg = vec![PointF64::default(); steps];
        draw_bezier_curves(&poly, &mut seg);
        out.extend(seg);
    }
    if let Some(first) = out.first().copied() {
        out.push(first);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: PointF64, b: PointF64) -> bool {
        a.dist(b) < 1e-9
    }

    #[test]
    fn test_linear_curve_is_lerp() {
        let a = AnchorPoint::new(0.0, 0.0);
        let b = AnchorPoint::new(10.0, 20.0);
        assert!(near(point_on_curve(0.5, &a, &b), PointF64::new(5.0, 10.0)));
    }

    #[test]
    fn test_curve_endpoints() {
        let a = AnchorPoint::new(0.0, 0.0);
        let mut b = AnchorPoint::new(10.0, 0.0);
        b.cp1 = Some(PointF64::new(3.0, 8.0));
        b.cp2 = Some(PointF64::new(7.0, -8.0));
        assert!(near(point_on_curve(0.0, &a, &b), a.pt));
        assert!(near(point_on_curve(1.0, &a, &b), b.pt));
    }

    #[test]
    fn test_quadratic_midpoint() {
        let a = AnchorPoint::new(0.0, 0.0);
        let mut b = AnchorPoint::new(2.0, 0.0);
        b.cp1 = Some(PointF64::new(1.0, 2.0));
        // (1-t)^2 p0 + 2t(1-t) p1 + t^2 p2 at t=0.5
        assert!(near(point_on_curve(0.5, &a, &b), PointF64::new(1.0, 1.0)));
    }

    #[test]
    fn test_sampling_excludes_end() {
        let poly = [PointF64::new(0.0, 0.0), PointF64::new(4.0, 0.0)];
        let mut out = [PointF64::default(); 4];
        draw_bezier_curves(&poly, &mut out);
        assert!(near(out[0], PointF64::new(0.0, 0.0)));
        assert!(near(out[3], PointF64::new(3.0, 0.0)));
    }

    #[test]
    fn test_continue_curve_linear_extrapolates() {
        let a = AnchorPoint::new(0.0, 0.0);
        let b = AnchorPoint::new(1.0, 2.0);
        assert!(near(continue_curve(&a, &b, 1.0), PointF64::new(2.0, 4.0)));
    }

    #[test]
    fn test_continue_curve_prefers_cp2() {
        let a = AnchorPoint::new(0.0, 0.0);
        let mut b = AnchorPoint::new(5.0, 5.0);
        b.cp1 = Some(PointF64::new(100.0, 100.0));
        b.cp2 = Some(PointF64::new(4.0, 5.0));
        assert!(near(continue_curve(&a, &b, 1.0), PointF64::new(6.0, 5.0)));
        assert!(near(continue_curve(&a, &b, 2.0), PointF64::new(7.0, 5.0)));
    }

    #[test]
    fn test_transform_curve_endpoints() {
        let prev = AnchorPoint::new(-1.0, -1.0);
        let mut cur = AnchorPoint::new(0.0, 0.0);
        cur.cp1 = Some(PointF64::new(1.0, 1.0));
        let mut next = AnchorPoint::new(10.0, 0.0);
        next.cp1 = Some(PointF64::new(11.0, 1.0));
        assert_eq!(transform_curve(0.0, &prev, &cur, &next), cur);
        let end = transform_curve(1.0, &prev, &cur, &next);
        assert!(near(end.pt, next.pt));
        assert!(near(end.cp1.unwrap(), next.cp1.unwrap()));
        assert!(end.cp2.is_none());
    }

    #[test]
    fn test_transform_curve_fills_missing_handle() {
        let prev = AnchorPoint::new(0.0, 0.0);
        let cur = AnchorPoint::new(2.0, 0.0);
        let mut next = AnchorPoint::new(2.0, 0.0);
        next.cp1 = Some(PointF64::new(4.0, 4.0));
        let mid = transform_curve(0.5, &prev, &cur, &next);
        assert!(near(mid.cp1.unwrap(), PointF64::new(2.0, 2.0)));
    }

    #[test]
    fn test_transform_curve_follows_predecessor() {
        let cur = AnchorPoint::new(10.0, 0.0);
        let next = AnchorPoint::new(20.0, 0.0);
        let a = transform_curve(0.5, &AnchorPoint::new(0.0, 0.0), &cur, &next);
        let b = transform_curve(0.5, &AnchorPoint::new(-500.0, 900.0), &cur, &next);
        // collinear predecessor keeps the path straight
        assert!(near(a.pt, PointF64::new(15.0, 0.0)));
        assert!(b.pt.dist(a.pt) > 0.1);
        // the incoming edge heads down and right, so the path bends below the chord
        assert!(b.pt.y < 0.0);
        for prev in [AnchorPoint::new(0.0, 0.0), AnchorPoint::new(-500.0, 900.0)] {
            assert_eq!(transform_curve(0.0, &prev, &cur, &next), cur);
            assert!(near(transform_curve(1.0, &prev, &cur, &next).pt, next.pt));
        }
    }

    #[test]
    fn test_transform_curve_carries_handles_with_anchor() {
        let prev = AnchorPoint::new(0.0, 10.0);
        let mut cur = AnchorPoint::new(0.0, 0.0);
        cur.cp1 = Some(PointF64::new(1.0, 1.0));
        let mut next = AnchorPoint::new(4.0, 0.0);
        next.cp1 = Some(PointF64::new(5.0, 1.0));
        let mid = transform_curve(0.5, &prev, &cur, &next);
        assert!(near(mid.cp1.unwrap() - mid.pt, PointF64::new(1.0, 1.0)));
    }

    #[test]
    fn test_flatten_closed() {
        let pts = [
            AnchorPoint::new(0.0, 0.0),
            AnchorPoint::new(4.0, 0.0),
            AnchorPoint::new(4.0, 4.0),
        ];
        let line = flatten_closed(&pts, 8);
        // straight segments contribute their start point only, plus the closing point
        assert_eq!(line.len(), 4);
        assert_eq!(line[0], pts[2].pt);
        assert_eq!(line[3], line[0]);
    }
}
