//! jurito CLI - terminal client for the jurito legal-document assistant
//!
//! Two independent screens, reachable as distinct subcommands:
//! - `jurito summarize` — upload a contract PDF, read a plain-language summary
//! - `jurito petition` — three-step flight-incident intake that generates a
//!   legal petition document
//!
//! The screens share no state; each owns its view exclusively.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

mod tracing_setup;
mod tui;

#[derive(Parser, Debug)]
#[command(
    name = "jurito",
    author,
    version,
    about = "Entenda contratos e gere petições com a ajuda da IA",
    long_about = "Terminal client for the jurito assistant backend: upload a \
                  contract PDF for a plain-language summary, or walk through \
                  the flight-incident intake to generate a legal petition."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload a contract PDF and display a plain-language summary
    Summarize(SummarizeArgs),
    /// Walk through the flight-incident intake and generate a petition
    Petition,
}

#[derive(Args, Debug)]
struct SummarizeArgs {
    /// Contract PDF to preselect (can also be typed in the screen)
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let backend = jurito_client::HttpBackend::from_config()?;
    debug!(command = ?cli.command, "starting jurito");

    match cli.command {
        Commands::Summarize(args) => tui::summary::run(&backend, args.file).await,
        Commands::Petition => tui::petition::run(&backend).await,
    }
}
