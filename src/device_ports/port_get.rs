use serde::Deserialize;
use serde_json::Value;

// API: GET /onos/v1/devices/{id}/ports, the ports are only counted and printed
#[derive(Debug, Deserialize)]
pub struct PortsGet {
    pub ports: Vec<Value>,
}
