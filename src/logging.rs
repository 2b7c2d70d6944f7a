//! Tracing setup.
//!
//! Logs go to stderr so they never interleave with the menu on stdout. When
//! `logging.file` is configured they are appended to that file instead,
//! through a non-blocking writer whose guard must outlive the program.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mini_library={}", config.level)));

    let (writer, guard, ansi) = match config.file.as_deref().filter(|p| !p.trim().is_empty()) {
        Some(path) => {
            let path = Path::new(path);
            let directory = path.parent().filter(|d| !d.as_os_str().is_empty());
            if let Some(directory) = directory {
                if let Err(err) = std::fs::create_dir_all(directory) {
                    eprintln!("Failed to create log directory {}: {}", directory.display(), err);
                }
            }
            let file_name = path.file_name().unwrap_or_else(|| "mini-library.log".as_ref());
            let directory = directory.unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), None, true),
    };

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format.as_str() {
        "json" => fmt::layer().json().with_writer(writer).boxed(),
        "pretty" => fmt::layer().pretty().with_ansi(ansi).with_writer(writer).boxed(),
        _ => fmt::layer().compact().with_ansi(ansi).with_writer(writer).boxed(),
    };

    tracing_subscriber::registry().with(layer).with(filter).init();
    guard
}
