use crate::app_config::AppConfig;
use crate::release_files::fetch::{ReleaseFilesError, fetch_project};
use reqwest::Client;
use std::io::Write;
use tracing::instrument;

/// Prints one release filename per line.
#[instrument(skip_all)]
pub async fn report<W: Write>(client: &Client, config: &AppConfig, out: &mut W) -> Result<(), ReleaseFilesError> {
    let project = fetch_project(client, config).await?;
    for filename in project.filenames() {
        writeln!(out, "{}", filename)?;
    }

    Ok(())
}
