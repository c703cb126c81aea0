use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. `RUST_LOG` wins over `level`; request
/// traces from `tower_http` follow `level`, while sqlx statement logs are
/// kept at `warn` unless asked for explicitly.
pub(crate) fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

fn default_directives(level: &str) -> String {
    format!("{level},tower_http={level},sqlx=warn")
}

#[cfg(test)]
mod tests {
    use super::default_directives;

    #[test]
    fn default_directives_quiet_sqlx() {
        assert_eq!(
            default_directives("debug"),
            "debug,tower_http=debug,sqlx=warn"
        );
    }
}
