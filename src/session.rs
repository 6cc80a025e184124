// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! A Session owns one animated shape: its configuration, frame table and
//! animation clock.
//!
//! The render loop asks for a `TickHandle` once and then calls `tick` every
//! frame. Regeneration replaces table and clock in one `&mut self` call and
//! bumps the animation id, so handles issued before are stale and their
//! ticks yield nothing: an old stream can never draw from a new table.

use crate::{
    config::{Configuration, Presentation, Seed},
    error::LoopResult,
    trajectory::{self, AnimationClock, FrameTable},
    util::AnchorPoint,
};
use log::info;
use serde::Serialize;
use std::{fs, path::Path};

/// Identifies the tick stream of one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle {
    id: u64,
}

/// Sampled playback of one loop
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackExport {
    pub seed: String,
    /// seconds per loop
    pub duration: f64,
    pub resolution: usize,
    /// timestamp of every sample, milliseconds from loop start
    pub times: Vec<f64>,
    pub frames: Vec<Vec<AnchorPoint>>,
}

pub struct Session {
    config: Configuration,
    points: Vec<AnchorPoint>,
    frames: FrameTable,
    clock: AnimationClock,
}

impl Session {
    pub fn new(config: Configuration) -> Self {
        let g = trajectory::generate(&config);
        Self {
            config,
            points: g.points,
            frames: g.frames,
            clock: AnimationClock::default(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// the initialized shape, see `Generation::points`
    pub fn points(&self) -> &[AnchorPoint] {
        &self.points
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Rebuilds the frame table from the current configuration and
    /// cancels the running tick stream.
    pub fn regenerate(&mut self) {
        let g = trajectory::generate(&self.config);
        self.points = g.points;
        self.frames = g.frames;
        self.clock.restart();
        info!("session regenerated, animation id {}", self.clock.id);
    }

    pub fn reroll(&mut self, seed: Seed) {
        info!("reroll {} -> {}", self.config.seed, seed);
        self.config.seed = seed;
        self.regenerate();
    }

    /// Installs a new configuration. Regenerates when a shape or motion
    /// parameter changed, returns whether it did.
    pub fn set_config(&mut self, config: Configuration) -> bool {
        let regen = self.config.requires_regeneration(&config);
        self.config = config;
        if regen {
            self.regenerate();
        }
        regen
    }

    /// Applies on the next tick, the animation keeps running
    pub fn set_presentation(&mut self, presentation: Presentation) {
        self.config.presentation = presentation;
    }

    pub fn schedule(&self) -> TickHandle {
        TickHandle { id: self.clock.id }
    }

    pub fn is_current(&self, handle: TickHandle) -> bool {
        handle.id == self.clock.id
    }

    /// The shape to render at `now_ms`, or None when `handle` belongs to a
    /// cancelled stream. The first tick of a stream latches its start.
    pub fn tick(&mut self, handle: TickHandle, now_ms: f64) -> Option<Vec<AnchorPoint>> {
        if !self.is_current(handle) {
            return None;
        }
        Some(trajectory::tick(
            &self.frames,
            &mut self.clock,
            now_ms,
            &self.config,
        ))
    }

    /// Samples one loop at `samples` evenly spaced times on a private clock.
    /// The live clock and tick stream are not touched.
    pub fn export(&self, samples: usize) -> PlaybackExport {
        let samples = samples.max(1);
        let duration_ms = self.config.duration_ms();
        let mut clock = AnimationClock::default();
        let times: Vec<f64> = (0..samples)
            .map(|k| k as f64 * duration_ms / samples as f64)
            .collect();
        let frames = times
            .iter()
            .map(|t| trajectory::tick(&self.frames, &mut clock, *t, &self.config))
            .collect();
        PlaybackExport {
            seed: self.config.seed.to_string(),
            duration: self.config.duration,
            resolution: self.frames.len(),
            times,
            frames,
        }
    }

    pub fn export_json<P: AsRef<Path>>(&self, path: P, samples: usize) -> LoopResult<()> {
        let export = self.export(samples);
        let json = serde_json::to_string_pretty(&export)?;
        if let Some(dir) = path.as_ref().parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path.as_ref(), json)?;
        info!(
            "exported {} samples to {}",
            export.frames.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}
