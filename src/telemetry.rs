use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': {source}")]
    EnvFilter { value: String, source: ParseError },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl From<TelemetryError> for crate::error::ScanError {
    fn from(err: TelemetryError) -> Self {
        Self::Telemetry(err.to_string())
    }
}

/// Filter directive for the CLI flags. An explicit `-v`/`-q` beats the configured level.
pub fn level_for(verbose: u8, quiet: bool, configured: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// A valid `env` directive wins over `level`; an invalid one is ignored.
fn build_filter(level: &str, env: Option<&str>) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = env
        .filter(|directive| !directive.trim().is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
    {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|source| TelemetryError::EnvFilter {
        value: level.to_string(),
        source,
    })
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `level` when set.
pub fn init(level: &str) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(level, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0, false, None), "warn");
        assert_eq!(level_for(0, false, Some("info")), "info");
        assert_eq!(level_for(1, false, Some("error")), "info");
        assert_eq!(level_for(2, false, None), "debug");
        assert_eq!(level_for(5, false, None), "debug");
        assert_eq!(level_for(0, true, Some("debug")), "error");
    }

    #[test]
    fn bad_configured_level_is_reported() {
        let err =
            build_filter("profile_scan=notalevel", None).expect_err("filter should be rejected");
        assert!(matches!(err, TelemetryError::EnvFilter { .. }));
        assert!(err.to_string().contains("profile_scan=notalevel"));
    }

    #[test]
    fn env_directive_overrides_level() {
        let filter = build_filter("warn", Some("debug")).expect("env directive should parse");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_filter("profile_scan=notalevel", Some("info"))
            .expect("env directive should win over a bad level");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn unusable_env_directive_falls_back_to_level() {
        for env in [None, Some(""), Some("profile_scan=notalevel")] {
            let filter = build_filter("error", env).expect("level should parse");
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
        }
    }
}
