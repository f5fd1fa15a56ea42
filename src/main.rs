use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    cli::{Cli, Command},
    config::ProvisionConfig,
    errors::AppError,
    services::provisioner,
};

mod auth;
mod cli;
mod config;
mod errors;
mod models;
mod repositories;
mod services;
mod status;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "superuser_provisioner=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    let cli = Cli::parse();
    match cli.command {
        Command::CreateSuperuser { database_url } => {
            let config = ProvisionConfig::from_env();
            let outcome = provisioner::provision(database_url.as_deref(), &config)
                .await
                .map_err(|e| {
                    tracing::error!("create-superuser failed [{}]: {}", e.code(), e);
                    e
                })?;
            println!("{}", outcome.status());
        }
    }
    Ok(())
}
