use tracing_subscriber::EnvFilter;

/// Installs a stderr logger. Defaults to `warn`; `RUST_LOG` overrides it.
///
/// Stdout is reserved for the result line, so nothing here writes to it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be set when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init();
        tracing::info!("logger ready");
    }
}
