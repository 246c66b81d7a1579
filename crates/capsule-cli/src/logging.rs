use tracing_subscriber::EnvFilter;

/// Progress goes to stdout as plain lines; `RUST_LOG` overrides the filter.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose {
        "capsule=debug,capsule_core=debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_level(verbose)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
