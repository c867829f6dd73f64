use anyhow::Result;
use tracing::{info, warn};

use unwrap_core::BuildMode;
use unwrap_tasks::{logging, LogSink};

/// Fixes the process-wide [`BuildMode`] and installs logging.
///
/// `mode` overrides the environment and build defaults. It is ignored, with a
/// warning, if the mode was already read or installed.
///
/// # Errors
/// If a global `tracing` subscriber is already installed.
pub fn init(mode: Option<BuildMode>) -> Result<LogSink> {
    let sink = logging::init(logging::console_layer())?;

    if let Some(mode) = mode {
        if let Err(current) = mode.install() {
            warn!("Unwrap policy already fixed as {current}, ignoring {mode}");
        }
    }

    info!("Unwrap policy: {}", BuildMode::global());
    Ok(sink)
}
