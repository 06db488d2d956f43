mod cli;
mod commands;
mod infra;
mod render;

use safequote::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
