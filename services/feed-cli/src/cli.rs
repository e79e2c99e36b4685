use crate::commands::{run_normalize, run_vendors, NormalizeArgs};
use clap::{Parser, Subcommand};
use listing_feeds::config::FeedConfig;
use listing_feeds::error::AppError;
use listing_feeds::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "listing-feeds",
    about = "Normalize real-estate syndication feeds into canonical property and agent records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract every record of a feed export and write the accepted ones as JSON
    Normalize(NormalizeArgs),
    /// List registered feed vendors and their canonical-to-raw key bindings
    Vendors,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = FeedConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Normalize(args) => run_normalize(args, &config),
        Command::Vendors => {
            run_vendors();
            Ok(())
        }
    }
}
