//! Roster CLI
//!
//! Command-line interface for the in-memory employee roster

use clap::{Parser, Subcommand};
use roster_core::logging_facility;

mod commands;
mod config;

use config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - in-memory employee records", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run store commands line by line from stdin or a script
    Shell(commands::shell::ShellArgs),
    /// Run the sample scenario
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.config.log_profile);
    tracing::debug!(profile = cli.config.log_profile.as_str(), "logging initialized");

    let result = match cli.command {
        Commands::Shell(args) => commands::shell::execute(args, cli.config),
        Commands::Demo(args) => commands::demo::execute(args, cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
