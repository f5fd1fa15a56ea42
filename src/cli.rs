use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "superuser-provisioner", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a superuser if it does not exist
    CreateSuperuser {
        /// sqlite connection string of the application's user database
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,
    },
}
