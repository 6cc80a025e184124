// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! here integrates the geometry collaborators of the loop engine:
//! bezier curve primitives and convex hull reduction

pub mod bezier;
pub use bezier::*;

pub mod convex_hull;
pub use convex_hull::*;
