use config::{Config, ConfigError, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "REST_REPORT";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    device_ports: DevicePorts,
    release_files: ReleaseFiles,
}

impl AppConfig {
    /// Loads the compiled defaults, overridden by the optional `config` and `config_local` files and
    /// finally by `REST_REPORT_*` environment variables, e.g. `REST_REPORT_DEVICE_PORTS__URL`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(environment())
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("device_ports.url", "http://localhost:8181/onos/v1")?
            .set_default("device_ports.username", "onos")?
            .set_default("device_ports.password", "rocks")?
            .set_default(
                "device_ports.management_addresses",
                vec!["192.168.100.30", "192.168.100.31", "192.168.100.32"],
            )?
            .set_default("release_files.url", "https://pypi.org/pypi/sampleproject/json")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn device_ports(&self) -> &DevicePorts {
        &self.device_ports
    }

    pub fn release_files(&self) -> &ReleaseFiles {
        &self.release_files
    }
}

// Management addresses are comma separated, e.g. `REST_REPORT_DEVICE_PORTS__MANAGEMENT_ADDRESSES=10.0.0.1,10.0.0.2`
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("device_ports.management_addresses")
}

#[derive(Debug, Deserialize)]
pub struct DevicePorts {
    url: String,
    username: String,
    password: String,
    management_addresses: Vec<String>,
}

impl DevicePorts {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn management_addresses(&self) -> &[String] {
        &self.management_addresses
    }

    pub fn is_managed(&self, address: &str) -> bool {
        self.management_addresses.iter().any(|managed| managed == address)
    }
}

#[derive(Debug, Deserialize)]
pub struct ReleaseFiles {
    url: String,
}

impl ReleaseFiles {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                device_ports: DevicePorts {
                    url: "http://onos.url/onos/v1".to_string(),
                    username: "onos".to_string(),
                    password: "rocks".to_string(),
                    management_addresses: vec![
                        "192.168.100.30".to_string(),
                        "192.168.100.31".to_string(),
                        "192.168.100.32".to_string(),
                    ],
                },
                release_files: ReleaseFiles {
                    url: "https://pypi.url/pypi/sampleproject/json".to_string(),
                },
            },
        }
    }

    pub fn device_ports_url(mut self, url: String) -> Self {
        self.config.device_ports.url = url;
        self
    }

    pub fn credentials(mut self, username: &str, password: &str) -> Self {
        self.config.device_ports.username = username.to_string();
        self.config.device_ports.password = password.to_string();
        self
    }

    pub fn management_addresses(mut self, addresses: &[&str]) -> Self {
        self.config.device_ports.management_addresses = addresses.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn release_files_url(mut self, url: String) -> Self {
        self.config.release_files.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_falls_back_to_the_compiled_defaults() -> Result<(), ConfigError> {
        let config = AppConfig::load_with(environment().source(Some(config::Map::new())))?;

        assert_eq!(config.device_ports().url(), "http://localhost:8181/onos/v1");
        assert_eq!(config.device_ports().username(), "onos");
        assert_eq!(config.device_ports().password(), "rocks");
        assert_eq!(
            config.device_ports().management_addresses(),
            ["192.168.100.30", "192.168.100.31", "192.168.100.32"]
        );
        assert_eq!(config.release_files().url(), "https://pypi.org/pypi/sampleproject/json");

        Ok(())
    }

    #[test]
    fn load_applies_the_environment_overrides() -> Result<(), ConfigError> {
        let variables = config::Map::from([
            ("REST_REPORT_DEVICE_PORTS__URL".to_string(), "http://onos.lab/onos/v1".to_string()),
            (
                "REST_REPORT_DEVICE_PORTS__MANAGEMENT_ADDRESSES".to_string(),
                "10.0.0.1,10.0.0.2".to_string(),
            ),
            ("REST_REPORT_RELEASE_FILES__URL".to_string(), "https://pypi.lab/pypi/demo/json".to_string()),
            ("UNRELATED_DEVICE_PORTS__USERNAME".to_string(), "admin".to_string()),
        ]);

        let config = AppConfig::load_with(environment().source(Some(variables)))?;

        assert_eq!(config.device_ports().url(), "http://onos.lab/onos/v1");
        assert_eq!(config.device_ports().management_addresses(), ["10.0.0.1", "10.0.0.2"]);
        assert_eq!(config.device_ports().username(), "onos");
        assert_eq!(config.device_ports().password(), "rocks");
        assert_eq!(config.release_files().url(), "https://pypi.lab/pypi/demo/json");

        Ok(())
    }

    #[test]
    fn load_parses_a_single_management_address_as_a_list() -> Result<(), ConfigError> {
        let variables = config::Map::from([(
            "REST_REPORT_DEVICE_PORTS__MANAGEMENT_ADDRESSES".to_string(),
            "10.0.0.1".to_string(),
        )]);

        let config = AppConfig::load_with(environment().source(Some(variables)))?;

        assert_eq!(config.device_ports().management_addresses(), ["10.0.0.1"]);
        Ok(())
    }

    #[test]
    fn is_managed_only_accepts_configured_addresses() {
        let config = AppConfigBuilder::new().management_addresses(&["10.0.0.1"]).build();

        assert!(config.device_ports().is_managed("10.0.0.1"));
        assert!(!config.device_ports().is_managed("10.0.0.2"));
        assert!(!config.device_ports().is_managed(""));
    }
}
