// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Log module provides log initialization, reference
//! https://docs.rs/log4rs

use crate::{
    config::ProviderConfig,
    error::{ProviderError, ProviderResult},
};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::str::FromStr;

/// init logs system
pub fn init_log(level: LevelFilter, file_path: &str) -> ProviderResult<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(file_path)
        .map_err(|e| ProviderError::Config(format!("log file {}: {}", file_path, e)))?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| ProviderError::Config(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| ProviderError::Config(e.to_string()))?;
    Ok(())
}

/// init logs with the level and file named in the provider config
pub fn init_log_from_config(cfg: &ProviderConfig) -> ProviderResult<()> {
    init_log(parse_level(&cfg.log_level)?, &cfg.log_file)
}

pub fn parse_level(s: &str) -> ProviderResult<LevelFilter> {
    LevelFilter::from_str(s).map_err(|_| ProviderError::Config(format!("bad log level '{}'", s)))
}
