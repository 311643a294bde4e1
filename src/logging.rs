//! Structured logging setup for the binary

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted when `RUST_LOG` is unset
pub const LOG_ENV: &str = "RAILNET_LOG";

/// Resolve the filter directive from CLI flags
///
/// An explicit level wins; otherwise `-v` selects debug and the default is warn.
/// A bare level such as `trace` is scoped to this crate.
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("railnet={level}"),
        (true, None) => "railnet=debug".to_string(),
        (false, None) => "railnet=warn".to_string(),
    }
}

/// Install the global subscriber, writing to stderr
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = if log_level.is_some() || verbose {
        EnvFilter::new(filter_directive(verbose, log_level))
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
            .unwrap_or_else(|_| EnvFilter::new(filter_directive(false, None)))
    };

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
