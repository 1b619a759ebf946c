use rest_report::app_config::AppConfig;
use rest_report::{client, release_files};
use std::error::Error;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = client::new_client()?;
    let mut stdout = io::stdout().lock();
    release_files::report(&client, &config, &mut stdout).await?;

    Ok(())
}
