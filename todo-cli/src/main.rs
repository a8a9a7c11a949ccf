//! Main entry point for the todo command-line client.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use shared::config::ClientConfig;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod commands;
mod terminal;

use commands::{session, todos};

/// Todo CLI
#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Command-line client for the todo API", long_about = None)]
struct Cli {
    /// Path to a configuration file (yaml, json, or toml)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the todo API, overriding configuration and environment
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the todo CLI
#[derive(Subcommand)]
enum Commands {
    /// Sign in and save the session token
    Login(session::LoginArgs),

    /// Create an account
    Register(session::RegisterArgs),

    /// Show the signed-in user
    Whoami,

    /// Forget the saved session token
    Logout,

    /// List todos
    List,

    /// Add a todo
    Add(todos::AddArgs),

    /// Mark a todo as completed
    Complete {
        /// Id of the todo
        id: Uuid,
    },

    /// Delete a todo
    Delete {
        /// Id of the todo
        id: Uuid,
    },

    /// Change the account password
    ChangePassword,

    /// Print a default configuration file
    Config {
        /// Format of the configuration file to generate (yaml, json, or toml). Defaults to yaml.
        #[arg(long, short)]
        format: Option<String>,
    },

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)
        #[arg(long, short)]
        shell: clap_complete::Shell,
    },
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Completion { shell } => {
            commands::completion::generate_completion(*shell);
            return Ok(());
        }
        Commands::Config { format } => {
            return commands::config::generate_config(format.as_deref().unwrap_or("yaml"));
        }
        _ => {}
    }

    let config = ClientConfig::load_config(cli.config.as_deref(), cli.api_url.as_deref())
        .context("failed to load configuration")?;
    init_tracing(&config.log_level);
    debug!(api = %config.api_base_url, "configuration loaded");

    let controller = commands::controller(&config);
    match cli.command {
        Commands::Login(args) => session::login(&controller, args).await,
        Commands::Register(args) => session::register(&controller, args).await,
        Commands::Whoami => session::whoami(&controller).await,
        Commands::Logout => session::logout(&controller).await,
        Commands::ChangePassword => session::change_password(&controller).await,
        Commands::List => todos::list(&controller).await,
        Commands::Add(args) => todos::add(&controller, args).await,
        Commands::Complete { id } => todos::complete(&controller, id).await,
        Commands::Delete { id } => todos::delete(&controller, id).await,
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}
