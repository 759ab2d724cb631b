//! `tracing` subscriber setup for the desktop binary.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maps `-v` occurrences to a level: none is info, one is debug, more is trace.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = build_env_filter(level_for_verbosity(verbosity));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .try_init()?;
    Ok(())
}

/// `RUST_LOG` overrides the verbosity flag; other crates stay at warn.
fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,sentencify={level},ui={level},services={level},storage={level},sentencify_core={level}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::level_for_verbosity;

    #[test]
    fn verbosity_steps_through_levels() {
        assert_eq!(level_for_verbosity(0), Level::INFO);
        assert_eq!(level_for_verbosity(1), Level::DEBUG);
        assert_eq!(level_for_verbosity(5), Level::TRACE);
    }
}
