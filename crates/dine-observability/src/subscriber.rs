//! Tracing subscriber setup.

use dine_core::LogFormat;

/// Install the global `tracing` subscriber.
///
/// Output goes to stderr, which Spin captures per component. Calling this
/// more than once is harmless; only the first call installs a subscriber.
pub fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(tracing::Level::TRACE);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.try_init(),
    };
}
