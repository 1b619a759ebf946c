use crate::app_config::DevicePorts;
use reqwest::{Client, RequestBuilder};

/// Builds a GET request for `path` below the controller's base url, authenticated with the configured credentials.
pub fn authorized_get(client: &Client, config: &DevicePorts, path: &str) -> RequestBuilder {
    client
        .get(format!("{}{}", config.url(), path))
        .basic_auth(config.username(), Some(config.password()))
}
