mod api;
mod cli;
mod commands;
mod config;
mod file_io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Item {
            ids,
            output,
            api_key,
        } => {
            commands::item::handle(&ids, output.as_deref(), api_key)?;
        }

        Commands::Convert { input, output } => {
            commands::convert::handle(&input, output.as_deref())?;
        }

        Commands::Configure {
            api_key,
            base_url,
            show,
        } => {
            commands::configure::handle(api_key, base_url, show)?;
        }
    }

    Ok(())
}

/// Log to stderr so YAML on stdout stays clean; `RUST_LOG` overrides
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "dp2rathena=debug"
    } else {
        "dp2rathena=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
