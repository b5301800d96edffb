#![deny(missing_docs)]

//! # apiswag CLI
//!
//! Command Line Interface for the API description to Swagger converter.
//!
//! Supported Commands:
//! - `generate`: Reads an IR document (file or stdin) and writes a Swagger 2.0 document.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliResult;

mod error;
mod generate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API description to Swagger 2.0 converter")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an IR document into a Swagger 2.0 document.
    Generate(generate::GenerateArgs),
}

fn main() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "warn".to_string());

    // stdout carries the document, so logs go to stderr.
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
