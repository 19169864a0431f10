//! docpost CLI - Document-to-HTML converter.
//!
//! Provides commands for:
//! - `convert`: Render a document to HTML and image files
//! - `package`: Render a document and write an email-ready bundle

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertArgs, PackageArgs};
use output::Output;

/// docpost - Document-to-HTML converter.
#[derive(Parser)]
#[command(name = "docpost", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to HTML and image files.
    Convert(ConvertArgs),
    /// Render a document and write an email-ready bundle.
    Package(PackageArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Convert(args) => args.verbose,
        Commands::Package(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(&output),
        Commands::Package(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
