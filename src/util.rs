// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Utilities for random, rect, points and anchors...
//! Some primitive algorithms: shape.rs

use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::read_dir,
    io::{self, ErrorKind},
    ops::{Add, Mul, Sub},
    path::{Path, PathBuf, MAIN_SEPARATOR},
};

pub mod shape;
mod rand;
pub use rand::*;

/// get flag_file path...
pub fn get_project_root(flag_file: &str) -> io::Result<PathBuf> {
    let path = env::current_dir()?;
    let path_ancestors = path.as_path().ancestors();

    for p in path_ancestors {
        let has_flag = read_dir(p)?
            .filter_map(|e| e.ok())
            .any(|e| e.file_name() == *flag_file);
        if has_flag {
            return Ok(PathBuf::from(p));
        }
    }
    Err(io::Error::new(
        ErrorKind::NotFound,
        "Ran out of places to find flag_file",
    ))
}

/// Gets the absolute path of the workspace root, i.e. where Cargo.lock locates.
/// Falls back to the current directory for installed binaries.
pub fn get_loop_root_path() -> String {
    match get_project_root("Cargo.lock") {
        Ok(p) => p.to_string_lossy().to_string(),
        Err(_e) => ".".to_string(),
    }
}

pub fn get_abs_path(fpath: &str) -> String {
    if Path::new(fpath).is_relative() {
        format!("{}{}{}", get_loop_root_path(), MAIN_SEPARATOR, fpath)
    } else {
        fpath.to_string()
    }
}

/// A 2D coordinate in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF64 {
    pub x: f64,
    pub y: f64,
}

impl PointF64 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `other` to `self`.
    pub fn diff(self, other: PointF64) -> PointF64 {
        self - other
    }

    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dist(self, other: PointF64) -> f64 {
        (self - other).norm()
    }

    pub fn lerp(self, to: PointF64, factor: f64) -> PointF64 {
        PointF64 {
            x: self.x.mul_add(1.0 - factor, to.x * factor),
            y: self.y.mul_add(1.0 - factor, to.y * factor),
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for PointF64 {
    type Output = PointF64;

    fn add(self, rhs: PointF64) -> PointF64 {
        PointF64::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointF64 {
    type Output = PointF64;

    fn sub(self, rhs: PointF64) -> PointF64 {
        PointF64::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for PointF64 {
    type Output = PointF64;

    fn mul(self, rhs: f64) -> PointF64 {
        PointF64::new(self.x * rhs, self.y * rhs)
    }
}

/// One vertex of the animated shape.
///
/// `cp1` and `cp2` shape the bezier segment that *enters* this anchor from its
/// predecessor: none is a straight line, `cp1` alone a quadratic, both a cubic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub pt: PointF64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp1: Option<PointF64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp2: Option<PointF64>,
}

impl AnchorPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            pt: PointF64::new(x, y),
            cp1: None,
            cp2: None,
        }
    }

    pub const fn from_point(pt: PointF64) -> Self {
        Self {
            pt,
            cp1: None,
            cp2: None,
        }
    }

    /// Number of control points carried, i.e. curve order minus one.
    pub fn control_count(&self) -> usize {
        usize::from(self.cp1.is_some()) + usize::from(self.cp2.is_some())
    }
}

/// Resolves a possibly negative offset into `0..len`, wrapping backwards
/// from the end the way `-1` means "last". `len` must not be zero.
pub fn ring_index(len: usize, i: isize) -> usize {
    i.rem_euclid(len as isize) as usize
}

/// Cyclic neighbor access over a fixed-length ordered container.
pub trait Ring<T> {
    fn ring(&self, i: isize) -> &T;
    fn ring_mut(&mut self, i: isize) -> &mut T;
}

impl<T> Ring<T> for [T] {
    fn ring(&self, i: isize) -> &T {
        &self[ring_index(self.len(), i)]
    }

    fn ring_mut(&mut self, i: isize) -> &mut T {
        let idx = ring_index(self.len(), i);
        &mut self[idx]
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn left(self) -> u16 {
        self.x
    }

    pub fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn top(self) -> u16 {
        self.y
    }

    pub fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_index_wraps_both_ways() {
        assert_eq!(ring_index(5, -1), 4);
        assert_eq!(ring_index(5, -2), 3);
        assert_eq!(ring_index(5, 5), 0);
        assert_eq!(ring_index(5, 7), 2);
        assert_eq!(ring_index(1, -2), 0);
    }

    #[test]
    fn test_ring_access() {
        let mut v = vec![10, 20, 30];
        assert_eq!(*v.ring(-1), 30);
        assert_eq!(*v.ring(3), 10);
        *v.ring_mut(-3) = 11;
        assert_eq!(v[0], 11);
    }

    #[test]
    fn test_point_ops() {
        let a = PointF64::new(3.0, 4.0);
        let b = PointF64::new(1.0, 1.0);
        assert_eq!(a.diff(b), PointF64::new(2.0, 3.0));
        assert!((a.norm() - 5.0).abs() < f64::EPSILON);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(b * 2.0 + a, PointF64::new(5.0, 6.0));
    }

    #[test]
    fn test_anchor_control_count() {
        let mut ap = AnchorPoint::new(1.0, 2.0);
        assert_eq!(ap.control_count(), 0);
        ap.cp1 = Some(PointF64::new(0.0, 0.0));
        assert_eq!(ap.control_count(), 1);
        ap.cp2 = Some(PointF64::new(0.0, 0.0));
        assert_eq!(ap.control_count(), 2);
    }

    #[test]
    fn test_rect_bounds() {
        let r = Rect::new(2, 3, 10, 4);
        assert_eq!(r.area(), 40);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 7);
    }
}
