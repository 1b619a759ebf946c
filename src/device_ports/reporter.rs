use crate::app_config::AppConfig;
use crate::device_ports::devices::list_matching_devices;
use crate::device_ports::error::DevicePortsError;
use crate::device_ports::ports::{PortsOutcome, query_ports};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use tracing::instrument;

const RULE_WIDTH: usize = 70;

/// Lists the managed devices and prints the ports of each management address. Only the device listing is fatal, a
/// failed port query is printed and the next address is queried.
#[instrument(skip_all)]
pub async fn report<W: Write>(client: &Client, config: &AppConfig, out: &mut W) -> Result<(), DevicePortsError> {
    writeln!(out, "ONOS REST API - ports of {}", config.device_ports().url())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    writeln!(out, "1. Querying all devices...")?;
    let matched = list_matching_devices(client, config).await?;
    for device in matched.found() {
        writeln!(out, "Found {} → ID: {}", device.management_address, device.device_id)?;
    }

    writeln!(out, "\n2. Getting port details...")?;
    for device in &matched.by_management_address() {
        writeln!(out, "\n {} ({})", device.management_address, device.device_id)?;

        match query_ports(client, config, &device.device_id).await? {
            PortsOutcome::Found(ports) => {
                writeln!(out, "   Ports: {}", ports.len())?;
                writeln!(out, "{}", pretty_print(&ports)?)?;
            }
            PortsOutcome::Failed(status) => writeln!(out, "   Port query failed: {}", status.as_u16())?,
        }
    }

    writeln!(out, "\n DONE")?;
    Ok(())
}

fn pretty_print(ports: &[Value]) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    ports.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
