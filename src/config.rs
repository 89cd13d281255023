//! Runtime configuration and logging setup.
//!
//! The animation owns stdout and the terminal, so log output never goes to the
//! console: it is written to the file named by `ICOSA_LOG_PATH`, and logging
//! stays disabled when that variable is unset.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub use icosa_core::AnimationConfig;

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "ICOSA_LOG_PATH";

/// Settings read from the environment at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub log_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup(LOG_PATH_ENV)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });
        Self { log_path }
    }
}

/// Install the logger if a log file was configured.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Returns whether a
/// logger was installed.
pub fn init_logging(config: &RuntimeConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };
    let file = File::create(path)
        .with_context(|| format!("unable to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;
    Ok(true)
}
