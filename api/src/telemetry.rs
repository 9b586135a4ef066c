//! Tracing subscriber installation for the binary
//!
//! Library code only emits events; this is the single place that decides
//! where they go.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sso_shared::{LogFormat, LoggingConfig};

/// Build the event filter
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to our
/// crates with noisy dependencies turned down.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(format!("{},sqlx=warn,actix_server=info", config.level)),
    }
}

/// Install the global subscriber in the configured format
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(config)?);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init()?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false))
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_level_and_directives() {
        let config = LoggingConfig {
            level: "debug,sso_core=trace".to_string(),
            format: LogFormat::Compact,
        };
        assert!(env_filter(&config).is_ok());
    }
}
