//! AX CLI - project scaffolding from remote templates
//!
//! This is the main entry point for the ax command-line interface.

mod cli;
mod commands;
mod output;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Parse CLI args; usage errors exit 1, while --help and --version
    // render to stdout and exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Run command
    let result = match cli.command {
        Commands::Create(args) => commands::create::run(args).await,
    };

    if let Err(err) = result {
        // A cancelled prompt already said everything it needs to
        if !matches!(
            err.downcast_ref::<ax_scaffold::Error>(),
            Some(ax_scaffold::Error::Cancelled)
        ) {
            output::error(&format!("{err:#}"));
        }
        std::process::exit(1);
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
