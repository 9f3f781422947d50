use crate::config::Config;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

/// Installs the global subscriber: `RUST_LOG`-driven filter and a stdout fmt layer.
pub fn init(config: &Config) -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_target(true);

    let default_filter = format!("{}=debug", config.service_name.replace('-', "_"));
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    Registry::default().with(env_filter).with(fmt_layer).try_init()?;

    tracing::info!(service = %config.service_name, "Tracing initialized");
    Ok(())
}
