//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dp2rathena")]
#[command(about = "Divine Pride to rAthena item_db.yml converter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch items from the Divine Pride API and convert them
    #[command(visible_alias = "i")]
    Item {
        /// Divine Pride item ids
        #[arg(required = true)]
        ids: Vec<u32>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Divine Pride API key (uses configured key if not provided)
        #[arg(long, env = "DIVINEPRIDE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Convert item JSON already saved from the Divine Pride API
    #[command(visible_alias = "x")]
    Convert {
        /// JSON file with one item object or an array of them ("-" for stdin)
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the Divine Pride API key
        #[arg(long)]
        api_key: Option<String>,

        /// Set the Divine Pride API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_item_ids_and_output() {
        let cli = Cli::try_parse_from([
            "dp2rathena", "item", "501", "1201", "-o", "out.yml", "--api-key", "k",
        ])
        .unwrap();
        match cli.command {
            Commands::Item {
                ids,
                output,
                api_key,
            } => {
                assert_eq!(ids, vec![501, 1201]);
                assert_eq!(output, Some(PathBuf::from("out.yml")));
                assert_eq!(api_key.as_deref(), Some("k"));
            }
            _ => panic!("expected item command"),
        }
    }

    #[test]
    fn test_item_requires_an_id() {
        assert!(Cli::try_parse_from(["dp2rathena", "item"]).is_err());
        assert!(Cli::try_parse_from(["dp2rathena", "item", "potion"]).is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["dp2rathena", "convert", "-", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Convert { .. }));
    }
}
