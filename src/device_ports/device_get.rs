use serde::Deserialize;

// API: GET /onos/v1/devices
#[derive(Debug, Deserialize)]
pub struct DevicesGet {
    pub devices: Vec<DeviceGet>,
}

#[derive(Debug, Deserialize)]
pub struct DeviceGet {
    pub id: String,
    #[serde(default)]
    pub annotations: Annotations,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotations {
    #[serde(default)]
    pub management_address: String,
}

impl DeviceGet {
    pub fn management_address(&self) -> &str {
        &self.annotations.management_address
    }
}
