//! CourseHub - Application entry point
//!
//! CLI-based entry point that dispatches to the catalog commands.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use common::config::ServiceConfig;
use coursehub::{
    cli::{Cli, Commands},
    commands,
    services::{ServiceContainer, Services},
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    let config = ServiceConfig::from_env();
    init_tracing(cli.verbose, &config.log_level);
    tracing::info!(service = %config.service_name, "Starting");

    let services: Arc<dyn ServiceContainer> = Arc::new(Services::from_env());

    // Execute command
    let result = match cli.command {
        Commands::Courses(args) => commands::courses::execute(args, services.as_ref()),
        Commands::Dashboard(args) => commands::dashboard::execute(args, services).await,
        Commands::Demo(args) => commands::demo::execute(args, services).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
///
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_tracing(verbose: bool, default_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
