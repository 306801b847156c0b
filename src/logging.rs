//! Log filter construction for the stderr and JSON file layers.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Filter from the directives in env var `var`, falling back to `default`
/// when the variable is unset or empty.
pub fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    filter_from(&std::env::var(var).unwrap_or_default(), default)
}

/// Filter from a directive string such as `bikeshare_stats=debug,warn`.
/// Invalid directives are skipped.
pub fn filter_from(directives: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives)
}
