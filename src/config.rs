//! Runtime configuration and logging setup.
//!
//! Settings come from the environment (a `.env` file is loaded by the binary first).
//! Logging goes through log4rs, configured from a YAML file when one exists.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Environment variable naming the log4rs YAML file.
pub const LOG_CONFIG_ENV: &str = "CIDRL_LOG_CONFIG";

/// Log4rs YAML file used when [`LOG_CONFIG_ENV`] is not set.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the log4rs YAML file.
    pub log_config: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LOG_CONFIG_ENV).filter(|path| !path.trim().is_empty()) {
            Some(path) => Settings {
                log_config: PathBuf::from(path.trim()),
            },
            None => Settings::default(),
        }
    }
}

/// Log level for a number of `-v` flags.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize log4rs.
///
/// Without `-v` flags the YAML file from [`Settings`] is used if present. Otherwise, or
/// when `-v` is given, logging goes to stderr at [`level_for`] the verbosity; stdout
/// carries results only.
pub fn init_logging(settings: &Settings, verbosity: u8) -> Result<(), Box<dyn Error>> {
    if verbosity == 0 && Path::new(&settings.log_config).exists() {
        log4rs::init_file(&settings.log_config, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                settings.log_config.display()
            )
        })?;
        log::debug!("Logging configured from {}", settings.log_config.display());
        return Ok(());
    }
    log4rs::init_config(stderr_config(level_for(verbosity))?)?;
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {M} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
