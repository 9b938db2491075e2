//! File logging
//!
//! The terminal owns stdout, so records go to `{data_dir}/cocktail-browser.log`.
//! `RUST_LOG` wins over the configured level. `log` records from the library
//! crates are bridged into `tracing` by the subscriber's init.

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "cocktail-browser";

/// Install the global subscriber.
///
/// The returned guard flushes the background writer on drop; keep it alive
/// until the terminal is restored.
pub fn init_logging(log_dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(
        "Logging to {}",
        log_dir.join(format!("{LOG_FILE_PREFIX}.log")).display()
    );

    Ok(guard)
}
