// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Convex hull by Andrew's monotone chain.
//!
//! Returns the hull counter-clockwise in y-up terms (clockwise on screen),
//! starting from the lowest-x point. Collinear and duplicate points are
//! dropped, so the result is strictly convex whenever it has 3+ points.

use crate::util::PointF64;
use std::cmp::Ordering;

fn cross(o: PointF64, a: PointF64, b: PointF64) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

pub fn convex_hull(points: &[PointF64]) -> Vec<PointF64> {
    let mut pts: Vec<PointF64> = points.iter().copied().filter(|p| p.is_finite()).collect();
    pts.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<PointF64> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<PointF64> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }

    // last point of each chain is the first of the other
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// True when the closed polygon turns the same way at every vertex and winds
/// exactly once, i.e. it is strictly convex and does not self-intersect.
pub fn is_convex_polygon(points: &[PointF64]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0f64;
    let mut turning = 0.0f64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let cr = cross(a, b, c);
        if cr == 0.0 {
            return false;
        }
        if sign == 0.0 {
            sign = cr.signum();
        } else if cr.signum() != sign {
            return false;
        }
        let d1 = b - a;
        let d2 = c - b;
        turning += (d1.x * d2.y - d1.y * d2.x).atan2(d1.x * d2.x + d1.y * d2.y);
    }
    (turning.abs() - std::f64::consts::TAU).abs() < 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> PointF64 {
        PointF64::new(x, y)
    }

    #[test]
    fn test_hull_drops_interior_points() {
        let pts = [p(0.0, 0.0), p(4.0, 0.0), p(2.0, 1.0), p(4.0, 4.0), p(0.0, 4.0), p(1.0, 3.0)];
        let h = convex_hull(&pts);
        assert_eq!(h.len(), 4);
        assert!(!h.contains(&p(2.0, 1.0)));
        assert!(!h.contains(&p(1.0, 3.0)));
        assert!(is_convex_polygon(&h));
    }

    #[test]
    fn test_hull_drops_collinear_and_duplicates() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(2.0, 0.0), p(1.0, 1.0)];
        let h = convex_hull(&pts);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn test_hull_small_inputs() {
        assert!(convex_hull(&[]).is_empty());
        assert_eq!(convex_hull(&[p(1.0, 1.0)]).len(), 1);
        assert_eq!(convex_hull(&[p(1.0, 1.0), p(1.0, 1.0)]).len(), 1);
        // all collinear collapses to the two extremes
        assert_eq!(convex_hull(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]).len(), 2);
    }

    #[test]
    fn test_is_convex_rejects_star() {
        let star: Vec<PointF64> = (0..5)
            .map(|i| {
                let a = std::f64::consts::TAU * (i as f64 * 2.0) / 5.0;
                p(a.cos(), a.sin())
            })
            .collect();
        assert!(!is_convex_polygon(&star));
        let pentagon: Vec<PointF64> = (0..5)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / 5.0;
                p(a.cos(), a.sin())
            })
            .collect();
        assert!(is_convex_polygon(&pentagon));
    }
}
