// RustPixel
// copyright zipxing@hotmail.com 2022~2024

//! Context encapsulates several public variables
//! including stage，state，input events, etc.
//! For simplicity, state is set to u8 type，apps can map it to their own enums.
//! Context also integrates an RNG for user's convenience.
//! A render adapter is also provided, crossterm for the terminal or a
//! headless one for tests and batch export.

use crate::{event::Event, render::adapter::Adapter, util::Rand};

#[cfg(feature = "crossterm")]
use crate::render::adapter::cross::CrosstermAdapter;
#[cfg(not(feature = "crossterm"))]
use crate::render::adapter::headless::HeadlessAdapter;

pub struct Context {
    pub game_name: String,
    pub project_path: String,
    pub stage: u32,
    pub state: u8,
    pub rand: Rand,
    pub input_events: Vec<Event>,
    pub adapter: Box<dyn Adapter>,
}

impl Context {
    /// Context with the default adapter of this build
    pub fn new(name: &str, project_path: &str) -> Self {
        #[cfg(feature = "crossterm")]
        let adapter: Box<dyn Adapter> = Box::new(CrosstermAdapter::new(name, project_path));
        #[cfg(not(feature = "crossterm"))]
        let adapter: Box<dyn Adapter> = Box::new(HeadlessAdapter::new(name, project_path));
        Self::with_adapter(name, project_path, adapter)
    }

    pub fn with_adapter(name: &str, project_path: &str, adapter: Box<dyn Adapter>) -> Self {
        Self {
            game_name: name.to_string(),
            project_path: project_path.to_string(),
            stage: 0,
            state: 0,
            rand: Rand::new(),
            input_events: vec![],
            adapter,
        }
    }
}
