use reqwest::StatusCode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevicePortsError {
    #[error("device query failed with status {0}, check the controller connection and credentials")]
    UpstreamStatus(StatusCode),
    #[error("no devices match the configured management addresses")]
    NoMatchingDevices,
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unable to write the report: {0}")]
    Output(#[from] io::Error),
}
