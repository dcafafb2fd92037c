//! CivicStorm CLI - Submit civic reports and triage them.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (the session is remembered between runs)
//! civicstorm login -e jane.smith@example.com -p password
//!
//! # Submit a report
//! civicstorm reports submit --type civic --category pothole \
//!     --title "Pothole on Main" --description "Deep hole near the crosswalk" \
//!     --location "Main Street"
//!
//! # Search your reports
//! civicstorm reports search --query pothole
//!
//! # Triage (admin only)
//! civicstorm login -e admin@civicstorm.com -p password
//! civicstorm reports set-status report-1 in_progress
//! ```
//!
//! # Commands
//!
//! - `login` / `signup` / `logout` / `whoami` - Session management
//! - `reports` - Submit, list, search and triage reports
//!
//! Reports live in memory for the duration of one run; only the signed-in
//! user is persisted.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use civicstorm_client::config::ClientConfig;
use civicstorm_client::services::NotificationLog;
use civicstorm_client::state::AppState;

mod commands;
mod error;
mod output;

use error::AppError;
use output::Output;

#[derive(Parser)]
#[command(name = "civicstorm")]
#[command(author, version, about = "CivicStorm civic issue reporting")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login {
        /// Account email (case-insensitive)
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "CIVICSTORM_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "CIVICSTORM_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and forget the saved session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Work with reports
    Reports {
        #[command(subcommand)]
        action: commands::reports::ReportsAction,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for --json output
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "civicstorm=warn,civicstorm_client=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let out = Output::new(cli.json);

    if let Err(e) = run(cli, &out).await {
        tracing::error!("Command failed: {e}");
        out.error(&e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, out: &Output) -> Result<(), AppError> {
    let config = ClientConfig::from_env()?;
    let log = Arc::new(NotificationLog::new());
    let mut state = AppState::from_config(&config, log.clone());

    let result = match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&mut state, out, &email, password).await
        }
        Commands::Signup {
            name,
            email,
            password,
        } => commands::auth::signup(&mut state, out, &name, &email, password).await,
        Commands::Logout => {
            commands::auth::logout(&mut state);
            Ok(())
        }
        Commands::Whoami => commands::auth::whoami(&state, out),
        Commands::Reports { action } => commands::reports::run(&mut state, out, action),
    };

    out.notifications(&log.drain());
    result
}
