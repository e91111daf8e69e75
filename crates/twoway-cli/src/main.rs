mod commands;
mod locations;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use twoway_router::{Config, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "twoway")]
#[command(version, about = "Twoway CLI - parse paths into locations and format them back", long_about = None)]
struct Cli {
    /// Config file (missing file means defaults)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path to a location
    Parse {
        /// Path to resolve, e.g. users/1/invoice/42
        path: String,
    },

    /// Build the path of a location
    Format {
        #[command(subcommand)]
        location: FormatLocation,
    },

    /// List routes in precedence order
    Routes,
}

#[derive(Subcommand)]
pub enum FormatLocation {
    /// The home page
    Home,

    /// A user page
    User {
        /// User id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// An invoice of a user
    Invoice {
        /// User id
        #[arg(allow_negative_numbers = true)]
        user_id: i64,

        /// Invoice id
        #[arg(allow_negative_numbers = true)]
        invoice_id: i64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load config: {:?}", cli.config))?;
    let router = locations::router(config.router).context("Failed to build router")?;
    tracing::debug!(config = ?cli.config, routes = router.len(), "router ready");

    // Execute command
    match cli.command {
        Commands::Parse { path } => {
            commands::parse::execute(&router, &path)?;
        }
        Commands::Format { location } => {
            commands::format::execute(&router, location)?;
        }
        Commands::Routes => {
            commands::routes::execute(&router)?;
        }
    }

    Ok(())
}
