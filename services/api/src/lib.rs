mod cli;
mod infra;
mod present;
mod routes;
mod server;

use parcel_rules::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
