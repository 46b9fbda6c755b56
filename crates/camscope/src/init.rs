//! Logging setup.

/// Initializes `env_logger` so library log records are printed.
///
/// Filtering follows `RUST_LOG`. Calling this more than once is harmless.
///
/// # Example
///
/// ```no_run
/// camscope::init_logging();
/// log::info!("ready");
/// ```
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::info!("camscope {} logging initialized", env!("CARGO_PKG_VERSION"));
    }
}
