use clap::Parser;
use std::process::ExitCode;

use copy_index_mapping::config::Config;
use copy_index_mapping::copier::{self, Outcome};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("copy_index_mapping=info".parse()?),
        )
        .init();

    let config = Config::parse();
    tracing::debug!("Elasticsearch URL: {}", config.base_url());

    let today = config
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let result = copier::run(&config, today).await;
    match &result {
        Ok(Outcome::NotMaster) => {}
        Ok(Outcome::Copied { from, to, .. }) => {
            tracing::info!("Copied mapping type '{}' from {from} to {to}", config.mapping_type);
        }
        Err(e) => tracing::error!("{e}"),
    }

    Ok(ExitCode::from(copier::exit_status(&result)))
}
