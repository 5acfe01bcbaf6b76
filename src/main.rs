use clap::Parser;
use tracing::{error, info};

use skinprice::adapter::inbound::cli::command::{Cli, Commands};
use skinprice::adapter::inbound::cli::{items, output, run};
use skinprice::infrastructure::config::settings::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(cli.json);

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config {}: {e}", cli.config.display());
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("skinprice starting");

    let result = match &cli.command {
        Commands::Run => run::execute(&config).await,
        Commands::Items(args) => items::execute(&config, args).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("skinprice stopped");
}
