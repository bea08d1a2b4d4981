use tracing_subscriber::{EnvFilter, prelude::*};

use crate::core::error::{ClockError, ClockResult};

/// Initialize logging based on environment configuration.
///
/// Logs go to stderr so they never corrupt the ANSI screen or JSON frames on
/// stdout.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized or skipped
/// - `Err(ClockError::LoggingInitialization)` if initialization fails
pub fn init_logging() -> ClockResult<()> {
    // Check if RUST_LOG is set, skip logging if not
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    // Use EnvFilter to automatically parse RUST_LOG environment variable
    let env_filter = EnvFilter::from_default_env();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let subscriber = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter);

    subscriber
        .try_init()
        .map_err(|e| ClockError::LoggingInitialization(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test environment variable logging setup
    #[test]
    fn test_env_logging_setup() {
        // Test without RUST_LOG - should succeed (no logging)
        let result = init_logging();
        assert!(result.is_ok());
    }
}
