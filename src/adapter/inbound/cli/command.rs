//! Command-line interface definitions.
//!
//! Defines the CLI structure for the skinprice application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cached Skinport price catalog
#[derive(Parser, Debug)]
#[command(name = "skinprice")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Warm the cache and keep it refreshed until interrupted
    Run,

    /// Fetch the merged catalog once and print a page of it
    Items(ItemsArgs),
}

/// Arguments for the `items` subcommand.
#[derive(Parser, Debug)]
pub struct ItemsArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Items per page (1-100)
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_defaults() {
        let cli = Cli::try_parse_from(["skinprice", "items"]).unwrap();

        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert!(!cli.json);
        match cli.command {
            Commands::Items(args) => {
                assert_eq!(args.page, 1);
                assert_eq!(args.limit, 20);
            }
            Commands::Run => panic!("expected items"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "skinprice", "items", "--page", "3", "--limit", "50", "--json", "-c", "prod.toml",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.config, PathBuf::from("prod.toml"));
        assert!(matches!(
            cli.command,
            Commands::Items(ItemsArgs { page: 3, limit: 50 })
        ));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["skinprice", "sell"]).is_err());
    }
}
