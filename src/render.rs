// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Render module, the rendering collaborator of the loop engine.
//!
//! The interpolated shape is stroked into a Buffer of Cells (stroke.rs),
//! the Buffer is diffed against the previous frame and flushed through
//! an Adapter (adapter.rs).

pub mod adapter;
pub mod buffer;
pub mod cell;
pub mod stroke;
pub mod style;
