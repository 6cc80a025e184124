// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Strokes a closed anchor path into a cell buffer.
//!
//! Canvas coordinates are fitted into the buffer keeping the aspect ratio,
//! with terminal cells counted as twice as tall as they are wide.

use crate::{
    algorithm::{flatten_closed, CURVE_STEPS},
    config::Presentation,
    render::{buffer::Buffer, style::Style},
    util::{AnchorPoint, PointF64},
};
use itertools::Itertools;

/// height / width of one terminal cell
pub const CELL_ASPECT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Viewport {
    /// Fits a `canvas_w` x `canvas_h` canvas into `cols` x `rows` cells, centered
    pub fn fit(canvas_w: f64, canvas_h: f64, cols: u16, rows: u16) -> Self {
        let cols = cols.max(1) as f64;
        let rows = rows.max(1) as f64;
        // cell units per canvas unit, horizontally
        let s = (cols / canvas_w.max(f64::EPSILON)).min(rows * CELL_ASPECT / canvas_h.max(f64::EPSILON));
        let scale_x = s;
        let scale_y = s / CELL_ASPECT;
        Self {
            scale_x,
            scale_y,
            offset_x: (cols - canvas_w * scale_x) / 2.0,
            offset_y: (rows - canvas_h * scale_y) / 2.0,
        }
    }

    pub fn project(&self, p: PointF64) -> (i32, i32) {
        (
            (p.x * self.scale_x + self.offset_x).floor() as i32,
            (p.y * self.scale_y + self.offset_y).floor() as i32,
        )
    }
}

/// Strokes the closed path through `points` with the given presentation
pub fn stroke_shape(buf: &mut Buffer, vp: &Viewport, points: &[AnchorPoint], pr: &Presentation) {
    let style = Style::default().fg(pr.color);
    let cells: Vec<(i32, i32)> = flatten_closed(points, CURVE_STEPS)
        .into_iter()
        .map(|p| vp.project(p))
        .dedup()
        .collect();
    let mut phase = 0;
    for (a, b) in cells.iter().tuple_windows() {
        phase = buf.draw_line(*a, *b, pr.symbol, &pr.dash, phase, style);
    }
    if pr.show_points {
        for ap in points {
            for cp in ap.cp1.iter().chain(ap.cp2.iter()) {
                let (x, y) = vp.project(*cp);
                buf.set_char(x, y, '+', Style::default().fg(pr.color));
            }
        }
        for ap in points {
            let (x, y) = vp.project(ap.pt);
            buf.set_char(x, y, 'o', style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Rect;

    #[test]
    fn test_viewport_fits_and_centers() {
        let vp = Viewport::fit(1000.0, 1000.0, 80, 20);
        // rows limit: 20 rows hold 40 width units
        assert!((vp.scale_x - 0.04).abs() < 1e-12);
        assert_eq!(vp.project(PointF64::new(0.0, 0.0)), (20, 0));
        assert_eq!(vp.project(PointF64::new(999.0, 999.0)), (59, 19));
    }

    #[test]
    fn test_stroke_square_stays_inside() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 20));
        let vp = Viewport::fit(100.0, 100.0, 40, 20);
        let pts = [
            AnchorPoint::new(10.0, 10.0),
            AnchorPoint::new(90.0, 10.0),
            AnchorPoint::new(90.0, 90.0),
            AnchorPoint::new(10.0, 90.0),
        ];
        let pr = Presentation {
            show_points: true,
            ..Presentation::default()
        };
        stroke_shape(&mut buf, &vp, &pts, &pr);
        let drawn = buf.content.iter().filter(|c| !c.is_blank()).count();
        assert!(drawn > 40);
        let (x, y) = vp.project(pts[0].pt);
        assert_eq!(buf.get(x as u16, y as u16).symbol, 'o');
    }
}
