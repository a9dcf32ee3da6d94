use crate::config::cli::Args;
use crate::config::Config;
use crate::domain::storage::StorageKeys;
use crate::error::Result;
use crate::infrastructure::FileSystemStore;
use crate::services::site_service::SiteService;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;
mod templates;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let config = Config::from_args(args)?;
    let store = FileSystemStore::new(
        config.servers_dir(),
        config.output_dir(),
        config.site.readme_name.clone(),
    );
    let output = store.output_path(StorageKeys::INDEX_PAGE);

    let site = SiteService::new(config, Arc::new(store));
    site.run()?;

    info!("Generated {:?}", output);
    Ok(())
}
