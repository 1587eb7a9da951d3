use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "BRAINI_LOG";
const LOG_FILE_NAME: &str = "braini-games.log";

/// Installs a file logger when `BRAINI_LOG` holds a filter. The terminal is
/// in raw mode on the alternate screen, so nothing is ever logged to it.
pub fn init() -> Result<Option<PathBuf>, String>
{
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return Ok(None);
    };
    let env_filter =
        EnvFilter::try_new(&filter).map_err(|err| format!("Invalid {LOG_ENV} filter: {err}"))?;

    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    let file = File::create(&path)
        .map_err(|err| format!("Failed to create log file {}: {err}", path.display()))?;

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| err.to_string())?;

    Ok(Some(path))
}
