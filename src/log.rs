use log::LevelFilter;

/// Environment variable that turns on debug logging.
pub const DEBUG_ENV_VAR: &str = "WORDSEARCH_DEBUG";

/// Pick the default level from the CLI flag and the debug variable.
#[must_use]
pub fn default_level(verbose: bool, debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Initialize logging to stderr.
///
/// `RUST_LOG`, when set, overrides `level`. Output never goes to stdout, so the
/// report stays clean.
pub fn init_logger(level: LevelFilter) {
    use std::env;

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("logger initialized at {level:?} level");
}
