use anyhow::{Context, Result};
use log::LevelFilter;
use std::env;
use std::fs::File;
use std::path::Path;

/// Initialize logging for the game.
///
/// # Behavior
/// - Level is `Warn` by default and `Debug` when `debug_enabled`; `RUST_LOG`
///   overrides both.
/// - With `log_file`, records are written to that file instead of stderr so
///   they do not land on top of the full-screen interface.
///
/// # Errors
///
/// Returns an error if `log_file` cannot be created.
pub fn init_logger(debug_enabled: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (tests, embedding) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }

    Ok(())
}
