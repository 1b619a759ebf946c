use crate::app_config::{AppConfig, DevicePorts};
use crate::device_ports::device_get::{DeviceGet, DevicesGet};
use crate::device_ports::error::DevicePortsError;
use crate::device_ports::request::authorized_get;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchedDevice {
    pub management_address: String,
    pub device_id: String,
}

/// Every device with a managed address, in encounter order.
#[derive(Debug, Default, PartialEq)]
pub struct MatchedDevices {
    found: Vec<MatchedDevice>,
}

impl MatchedDevices {
    pub fn found(&self) -> &[MatchedDevice] {
        &self.found
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// One device per management address. A repeated address keeps its first position and takes the id of the last
    /// device reporting it.
    pub fn by_management_address(&self) -> Vec<MatchedDevice> {
        let mut devices: Vec<MatchedDevice> = Vec::with_capacity(self.found.len());

        for device in &self.found {
            match devices
                .iter_mut()
                .find(|existing| existing.management_address == device.management_address)
            {
                Some(existing) => existing.device_id = device.device_id.clone(),
                None => devices.push(device.clone()),
            }
        }

        devices
    }
}

#[instrument(skip(client, config))]
pub async fn list_matching_devices(client: &Client, config: &AppConfig) -> Result<MatchedDevices, DevicePortsError> {
    info!("Retrieving devices...");

    let response = authorized_get(client, config.device_ports(), "/devices").send().await?;
    if response.status() != StatusCode::OK {
        return Err(DevicePortsError::UpstreamStatus(response.status()));
    }

    let devices_get = serde_json::from_str::<DevicesGet>(&response.text().await?)?;
    info!("Retrieving devices... OK, {} found", devices_get.devices.len());

    let matched = match_devices(devices_get.devices, config.device_ports());
    if matched.is_empty() {
        return Err(DevicePortsError::NoMatchingDevices);
    }

    debug!("Matched devices: {:?}", matched);
    Ok(matched)
}

fn match_devices(devices: Vec<DeviceGet>, config: &DevicePorts) -> MatchedDevices {
    let found = devices
        .into_iter()
        .filter(|device| config.is_managed(device.management_address()))
        .map(|device| MatchedDevice {
            management_address: device.annotations.management_address,
            device_id: device.id,
        })
        .collect();

    MatchedDevices { found }
}
