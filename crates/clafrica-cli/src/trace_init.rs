#[cfg(feature = "trace")]
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "clafrica_core=debug,clafrica_session=debug",
                )
            }),
        )
        .init();
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing() {}
