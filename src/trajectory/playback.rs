// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Playback interpolator, maps a wall-clock time to a point configuration.
//!
//! Times are milliseconds as f64. The loop position selects frame t and
//! the fractional part blends every point toward the same point of frame
//! t + 1, wrapping to frame 0 after the last one.

use crate::{
    algorithm::transform_curve,
    config::Configuration,
    trajectory::assemble::FrameTable,
    util::{AnchorPoint, Ring},
};

/// Latched start of the running animation and the id of its tick stream
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationClock {
    pub start: Option<f64>,
    pub id: u64,
}

impl AnimationClock {
    /// Start time, latched to `now` on the first call
    pub fn latch(&mut self, now: f64) -> f64 {
        *self.start.get_or_insert(now)
    }

    /// Abandons the current stream, the next tick latches a new start
    pub fn restart(&mut self) {
        self.start = None;
        self.id = self.id.wrapping_add(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePosition {
    pub index: usize,
    pub next: usize,
    /// progress from `index` toward `next`, in [0, 1)
    pub blend: f64,
}

pub fn frame_position(start: f64, now: f64, duration_ms: f64, resolution: usize) -> FramePosition {
    let res = resolution.max(1);
    let progress = (now - start).rem_euclid(duration_ms);
    let loop_index = progress / duration_ms * res as f64;
    if !loop_index.is_finite() || loop_index >= res as f64 {
        return FramePosition {
            index: 0,
            next: 1 % res,
            blend: 0.0,
        };
    }
    let index = loop_index.floor() as usize;
    FramePosition {
        index,
        next: (index + 1) % res,
        blend: loop_index - index as f64,
    }
}

/// Point i moves from frame `index` toward frame `next` along a curve
/// that continues the edge from its predecessor in the current frame.
pub fn interpolate(frames: &FrameTable, pos: FramePosition) -> Vec<AnchorPoint> {
    if frames.is_empty() {
        return vec![];
    }
    let cur = frames.frame(pos.index % frames.len());
    let next = frames.frame(pos.next % frames.len());
    cur.iter()
        .enumerate()
        .map(|(i, p)| {
            let prev = cur.ring(i as isize - 1);
            transform_curve(pos.blend, prev, p, next.get(i).unwrap_or(p))
        })
        .collect()
}

/// One playback tick: latches the clock on first use and returns the
/// configuration to render at `now`.
pub fn tick(
    frames: &FrameTable,
    clock: &mut AnimationClock,
    now: f64,
    config: &Configuration,
) -> Vec<AnchorPoint> {
    let start = clock.latch(now);
    let pos = frame_position(start, now, config.duration_ms(), frames.len());
    interpolate(frames, pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::PointF64;

    fn table(xs: &[f64]) -> FrameTable {
        FrameTable::new(
            xs.iter()
                .map(|x| vec![AnchorPoint::new(*x, 0.0), AnchorPoint::new(*x, 10.0)])
                .collect(),
        )
    }

    #[test]
    fn test_frame_position() {
        let p = frame_position(1000.0, 1000.0, 10_000.0, 100);
        assert_eq!((p.index, p.next, p.blend), (0, 1, 0.0));
        let p = frame_position(0.0, 250.0, 1000.0, 4);
        assert_eq!((p.index, p.next, p.blend), (1, 2, 0.0));
        let p = frame_position(0.0, 900.0, 1000.0, 4);
        assert_eq!((p.index, p.next), (3, 0));
        assert!((p.blend - 0.6).abs() < 1e-9);
        // a whole number of loops later
        let p = frame_position(0.0, 3000.0, 1000.0, 4);
        assert_eq!((p.index, p.blend), (0, 0.0));
        // clocks running backwards still land inside the loop
        let p = frame_position(500.0, 0.0, 1000.0, 4);
        assert_eq!((p.index, p.next, p.blend), (2, 3, 0.0));
    }

    #[test]
    fn test_single_frame_and_bad_duration() {
        let p = frame_position(0.0, 123.0, 1000.0, 1);
        assert_eq!((p.index, p.next), (0, 0));
        let p = frame_position(0.0, 123.0, 0.0, 5);
        assert_eq!((p.index, p.blend), (0, 0.0));
    }

    #[test]
    fn test_tick_latches_and_blends() {
        let cfg = Configuration {
            duration: 1.0,
            ..Configuration::default()
        };
        let frames = table(&[0.0, 10.0, 20.0, 30.0]);
        let mut clock = AnimationClock::default();
        let first = tick(&frames, &mut clock, 5000.0, &cfg);
        assert_eq!(clock.start, Some(5000.0));
        assert_eq!(first, frames.frame(0));
        // (0,0) -> (10,0) with predecessor (0,10): control (0,-5)
        let mid = tick(&frames, &mut clock, 5125.0, &cfg);
        assert!(mid[0].pt.dist(PointF64::new(2.5, -2.5)) < 1e-9);
        // the last frame blends back into the first: (30,10) -> (0,10)
        // with predecessor (30,0), control (30,25)
        let wrap = tick(&frames, &mut clock, 5875.0, &cfg);
        assert!(wrap[1].pt.dist(PointF64::new(22.5, 17.5)) < 1e-9);
    }

    #[test]
    fn test_interpolate_uses_predecessor() {
        let moved = |x: f64, y: f64| {
            FrameTable::new(vec![
                vec![AnchorPoint::new(x, y), AnchorPoint::new(10.0, 0.0)],
                vec![AnchorPoint::new(x, y), AnchorPoint::new(20.0, 0.0)],
            ])
        };
        let pos = FramePosition {
            index: 0,
            next: 1,
            blend: 0.5,
        };
        let straight = interpolate(&moved(0.0, 0.0), pos);
        let bent = interpolate(&moved(-500.0, 900.0), pos);
        assert!(straight[1].pt.dist(PointF64::new(15.0, 0.0)) < 1e-9);
        assert_ne!(straight[1], bent[1]);
    }

    #[test]
    fn test_restart() {
        let mut clock = AnimationClock::default();
        clock.latch(10.0);
        assert_eq!(clock.latch(20.0), 10.0);
        clock.restart();
        assert_eq!(clock.start, None);
        assert_eq!(clock.id, 1);
    }

    #[test]
    fn test_empty_table() {
        let pos = frame_position(0.0, 0.0, 1.0, 0);
        assert!(interpolate(&FrameTable::default(), pos).is_empty());
    }
}
