pub mod app_config;
pub mod client;
pub mod device_ports;
pub mod release_files;
