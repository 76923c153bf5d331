//! Fetches both lists once and reports their sizes. Exercises the read
//! path end to end: configuration, bearer auth, page-load error handling.

use std::process::ExitCode;

use careconnect_api::actions::{fetch_programs, fetch_residents};
use careconnect_api::{ApiClient, ApiError};
use careconnect_config::get_config;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ApiError> {
    let config = get_config()?;
    let client = ApiClient::new(&config);

    let programs = fetch_programs(&client).await?;
    let residents = fetch_residents(&client).await?;
    info!(
        "{} programs, {} residents",
        programs.len(),
        residents.len()
    );

    Ok(())
}
