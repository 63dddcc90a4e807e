//! Runtime assembly from [`Config`].

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    directory::esi::EsiDirectoryClient,
    error::Error,
    model::id::IdClassifier,
    resolver::Resolver,
};

/// Build and configure the ESI client used for corporation lookups
pub fn build_esi_client(config: &Config) -> Result<eve_esi::Client, Error> {
    let esi_config = eve_esi::Config::builder()
        .esi_url(&config.esi_url)
        .build()?;

    let esi_client = eve_esi::Client::builder()
        .config(esi_config)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(esi_client)
}

/// Build the ESI directory client, without a character session
pub fn build_directory(config: &Config) -> Result<Arc<EsiDirectoryClient>, Error> {
    let esi_client = build_esi_client(config)?;
    let directory = EsiDirectoryClient::new(config, esi_client)?;

    Ok(Arc::new(directory))
}

/// Build a resolver over the given directory client
pub fn build_resolver(config: &Config, directory: Arc<EsiDirectoryClient>) -> Resolver {
    Resolver::new(directory, IdClassifier::new(config.dynamic_id_threshold))
}

/// Install the global tracing subscriber, filtered by `RUST_LOG` (default `info`)
///
/// Logs go to stderr so stdout only carries resolved names.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
