use crate::app_config::AppConfig;
use crate::device_ports::error::DevicePortsError;
use crate::device_ports::port_get::PortsGet;
use crate::device_ports::request::authorized_get;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{info, instrument, warn};

#[derive(Debug, PartialEq)]
pub enum PortsOutcome {
    Found(Vec<Value>),
    Failed(StatusCode),
}

/// Queries the ports of a single device. A non-OK status is an outcome rather than an error so the caller can
/// continue with the next device.
#[instrument(skip(client, config))]
pub async fn query_ports(client: &Client, config: &AppConfig, device_id: &str) -> Result<PortsOutcome, DevicePortsError> {
    info!("Retrieving ports...");

    let path = format!("/devices/{}/ports", device_id);
    let response = authorized_get(client, config.device_ports(), &path).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        warn!(status_code = %status, "⚠️ Retrieving ports failed");
        return Ok(PortsOutcome::Failed(status));
    }

    let ports_get = serde_json::from_str::<PortsGet>(&response.text().await?)?;
    info!("Retrieving ports... OK, {} found", ports_get.ports.len());

    Ok(PortsOutcome::Found(ports_get.ports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use serde_json::json;
    use test_log::test;

    #[test(tokio::test)]
    async fn query_ports_returns_the_ports_of_the_device() -> Result<(), DevicePortsError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/devices/of:0000000000000003/ports")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/onos_ports_response.json"))
            .match_header("authorization", "Basic b25vczpyb2Nrcw==")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().device_ports_url(server.url()).build();

        let outcome = query_ports(&Client::new(), &config, "of:0000000000000003").await?;

        mock.assert_async().await;
        assert_eq!(
            outcome,
            PortsOutcome::Found(vec![
                json!({ "element": "of:0000000000000003", "port": "local", "isEnabled": false }),
                json!({ "element": "of:0000000000000003", "port": "1", "isEnabled": true }),
            ])
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn query_ports_reports_a_failed_status_as_an_outcome() -> Result<(), DevicePortsError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/devices/of:0000000000000001/ports")
            .with_status(404)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().device_ports_url(server.url()).build();

        let outcome = query_ports(&Client::new(), &config, "of:0000000000000001").await?;

        mock.assert_async().await;
        assert_eq!(outcome, PortsOutcome::Failed(StatusCode::NOT_FOUND));

        Ok(())
    }
}
