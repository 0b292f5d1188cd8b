use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::metrics::sampler::DEFAULT_DISK_PATH;

/// Command-line configuration. Nothing is read from the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "performancemonitor",
    about = "Serves point-in-time host CPU, memory, disk and network usage as JSON",
    version
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    /// Path whose filesystem capacity is reported as disk usage
    #[arg(long, default_value = DEFAULT_DISK_PATH)]
    pub disk_path: PathBuf,

    /// Maximum log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Shorthand for `--log-level debug`
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl Config {
    /// `--debug` only ever raises verbosity; an explicit `trace` wins.
    pub fn effective_log_level(&self) -> Level {
        let level = Level::from(self.log_level);
        if self.debug && level < Level::DEBUG {
            Level::DEBUG
        } else {
            level
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
