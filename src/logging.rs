//! Tracing setup.
//!
//! The terminal belongs to the editor, so nothing is logged unless
//! `VIMLET_LOG` names a file. The filter comes from `RUST_LOG` and defaults
//! to `vimlet=info`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable naming the log file
pub const LOG_ENV: &str = "VIMLET_LOG";

const DEFAULT_FILTER: &str = "vimlet=info";

/// Install the file subscriber if `VIMLET_LOG` is set. Returns the log path
/// when logging is active.
pub fn init() -> std::io::Result<Option<PathBuf>> {
    match std::env::var_os(LOG_ENV).filter(|v| !v.is_empty()) {
        Some(path) => {
            let path = PathBuf::from(path);
            init_file(&path)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

/// Append trace output to `path`
pub fn init_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    // A subscriber may already be installed (tests); keep the existing one
    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        tracing::info!(path = %path.display(), version = env!("CARGO_PKG_VERSION"), "tracing initialized");
    }
    Ok(())
}
