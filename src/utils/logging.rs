use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Maps a configured level name to a `tracing` level. Unknown names fall back to `INFO`.
pub fn parse_level(name: &str) -> Level {
    match name.trim().to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Initialize tracing/logging for the application.
///
/// `default_level` applies unless `RUST_LOG` is set, in which case its
/// directives win.
pub fn init(default_level: &str) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(parse_level(default_level)).into())
        .from_env_lossy();

    // Use try_init so tests and libraries can call this multiple times without panicking
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
