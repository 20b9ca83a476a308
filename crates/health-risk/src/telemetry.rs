use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

const SERVICE_TARGETS: [&str; 2] = ["health_risk", "health_risk_api"];
const DEPENDENCY_LEVEL: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("log filter '{directives}' is not a valid tracing filter")]
    EnvFilter {
        directives: String,
        #[source]
        source: ParseError,
    },
    #[error("tracing subscriber could not be installed: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Expand a bare level such as `debug` into per-crate directives so dependencies stay at
/// `warn`. Anything containing `=` or `,` is passed through untouched.
pub fn directives(log_level: &str) -> String {
    let level = log_level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let mut directives = vec![DEPENDENCY_LEVEL.to_string()];
    directives.extend(
        SERVICE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

/// `RUST_LOG` wins when present; otherwise the configured level is expanded.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directives = directives(&config.log_level);
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::EnvFilter {
        directives,
        source,
    })
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels_are_scoped_to_service_crates() {
        assert_eq!(
            directives(" debug "),
            "warn,health_risk=debug,health_risk_api=debug"
        );
    }

    #[test]
    fn explicit_directives_pass_through() {
        assert_eq!(directives("health_risk=trace"), "health_risk=trace");
        assert_eq!(directives("info,axum=debug"), "info,axum=debug");
    }

    #[test]
    fn rejects_malformed_filter_when_env_unset() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = TelemetryConfig {
            log_level: "health_risk=loud".to_string(),
        };

        match env_filter(&config) {
            Err(TelemetryError::EnvFilter { directives, .. }) => {
                assert_eq!(directives, "health_risk=loud")
            }
            other => panic!("expected env filter error, got {other:?}"),
        }
    }
}
