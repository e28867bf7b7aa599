use tracing_subscriber::{fmt, EnvFilter};

/// Install the process-wide log subscriber.
///
/// `RUST_LOG` wins when set, so a single run can be debugged without touching
/// `.env`. Otherwise `default_level` applies, normally `AppConfig::log_level`.
/// Upstream fallbacks log at `warn` and heuristic verdicts at `debug`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(true).init();
}
