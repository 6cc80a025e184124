// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Error type shared by configuration loading, logging setup, the render
//! adapter and export.
//! Generation itself never fails, degenerate input gives a degenerate shape.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LoopError {
    Io(io::Error),
    ConfigParse(String),
    Serialize(String),
    InvalidConfig(String),
    Log(String),
    Render(String),
}

impl fmt::Display for LoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopError::Io(e) => write!(f, "io error: {}", e),
            LoopError::ConfigParse(msg) => write!(f, "config parse error: {}", msg),
            LoopError::Serialize(msg) => write!(f, "serialize error: {}", msg),
            LoopError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            LoopError::Log(msg) => write!(f, "log init error: {}", msg),
            LoopError::Render(msg) => write!(f, "render error: {}", msg),
        }
    }
}

impl std::error::Error for LoopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoopError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoopError {
    fn from(e: io::Error) -> Self {
        LoopError::Io(e)
    }
}

impl From<toml::de::Error> for LoopError {
    fn from(e: toml::de::Error) -> Self {
        LoopError::ConfigParse(e.to_string())
    }
}

impl From<serde_json::Error> for LoopError {
    fn from(e: serde_json::Error) -> Self {
        LoopError::Serialize(e.to_string())
    }
}

pub type LoopResult<T> = Result<T, LoopError>;
