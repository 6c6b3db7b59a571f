use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::filesystem::secure::ensure_parent_secure;

pub enum LogTarget {
    Stderr,
    /// Append to a file; used while the terminal UI owns stdout.
    File(PathBuf),
}

fn env_filter() -> Result<EnvFilter> {
    if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        return Ok(EnvFilter::from_default_env());
    }
    Ok(EnvFilter::default()
        // Base level for everything not matched below.
        .add_directive(LevelFilter::WARN.into())
        .add_directive("pwgauge=info".parse()?))
}

pub fn setup_logger(target: LogTarget) -> Result<()> {
    let filter = env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match target {
        LogTarget::Stderr => {
            let subscriber = builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("setting default subscriber failed")?;
        }
        LogTarget::File(path) => {
            ensure_parent_secure(&path)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let subscriber = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("setting default subscriber failed")?;
        }
    }
    Ok(())
}
