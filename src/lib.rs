// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel_loop generates seeded, seamlessly looping bezier shapes and plays
//! them back in the terminal.
//!
//! A shape is a convex set of anchors, each optionally carrying one or two
//! control points. Every anchor and control point travels its own closed
//! path, sampled into a frame table that the playback interpolator blends
//! through at any wall-clock time. After `duration` seconds the shape is
//! back where it started, and the loop repeats without a seam.
//!
//! The trajectory engine (trajectory, algorithm, config, util) is pure
//! and has no I/O. Session adds the mutable animation clock. Game, context,
//! event and render run it in a frame-driven main loop with a crossterm
//! or a headless adapter.
//!
//! We also provide a base mode in which neither crossterm nor log4rs is
//! compiled, which is a good fit for embedding the engine only.

/// framerate per second, set to moderate number to save CPUs
pub const GAME_FRAME: u32 = 60;

pub mod algorithm;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod game;
pub mod log;
pub mod render;
pub mod session;
pub mod trajectory;
pub mod util;
