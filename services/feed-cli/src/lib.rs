mod cli;
mod commands;

use listing_feeds::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
