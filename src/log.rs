// RustPixel
// copyright zipxing@hotmail.com 2022~2024

//! Log module provides various log functions, reference
//! https://docs.rs/log4rs
//!
//! The terminal is the render target, so logs always go to a file.

use crate::error::LoopResult;
#[cfg(feature = "log4rs")]
use crate::{error::LoopError, util::get_abs_path};
use log::LevelFilter;

#[cfg(feature = "log4rs")]
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// init logs system, relative paths resolve against the workspace root.
/// Fails instead of panicking when the file can't be created or a logger
/// is already installed.
pub fn init_log(level: LevelFilter, file_path: &str) -> LoopResult<()> {
    #[cfg(feature = "log4rs")]
    {
        let fpstr = get_abs_path(file_path);
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
            )))
            .build(fpstr)?;
        let config = Config::builder()
            .appender(
                Appender::builder()
                    .filter(Box::new(ThresholdFilter::new(level)))
                    .build("logfile", Box::new(logfile)),
            )
            .build(Root::builder().appender("logfile").build(level))
            .map_err(|e| LoopError::Log(e.to_string()))?;
        log4rs::init_config(config).map_err(|e| LoopError::Log(e.to_string()))?;
    }
    #[cfg(not(feature = "log4rs"))]
    {
        let _ = (level, file_path);
    }
    Ok(())
}
