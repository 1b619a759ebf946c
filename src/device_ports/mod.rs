mod device_get;
mod devices;
mod error;
mod port_get;
mod ports;
mod reporter;
mod request;

pub use devices::{MatchedDevice, MatchedDevices, list_matching_devices};
pub use error::DevicePortsError;
pub use ports::{PortsOutcome, query_ports};
pub use reporter::report;
