use crate::app_config::AppConfig;
use crate::release_files::project_get::ProjectGet;
use reqwest::{Client, StatusCode};
use std::io;
use thiserror::Error;
use tracing::{info, instrument};

/// Fetches the project metadata. Any non-success status fails, even when the error body is valid JSON.
#[instrument(skip(client, config))]
pub async fn fetch_project(client: &Client, config: &AppConfig) -> Result<ProjectGet, ReleaseFilesError> {
    let url = config.release_files().url();
    info!("Retrieving project {}...", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ReleaseFilesError::Status(status));
    }

    let body = response.text().await?;
    let project = serde_json::from_str::<ProjectGet>(&body)?;

    info!("Retrieving project {}... OK, {} releases found", url, project.releases.0.len());
    Ok(project)
}

#[derive(Error, Debug)]
pub enum ReleaseFilesError {
    #[error("upstream unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
    #[error("project query failed with status {0}")]
    Status(StatusCode),
    #[error("invalid project metadata: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unable to write the filenames: {0}")]
    Output(#[from] io::Error),
}
