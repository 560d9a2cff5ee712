//! Client configuration.
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default maximum duration of a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

const MASK: &str = "xxxxx";

/// Validated client configuration, see [ConfigBuilder].
#[derive(Clone, Debug)]
pub struct Config {
    url: Url,
    log_safe_address: String,
    websocket_address: String,
    timeout: Duration,
    allow_delayed_start: bool,
    user_agent: String,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The endpoint requests are sent to, credentials included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The endpoint with credentials, path and query values masked.
    pub fn address(&self) -> &str {
        &self.log_safe_address
    }

    pub fn websocket_address(&self) -> &str {
        &self.websocket_address
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn allow_delayed_start(&self) -> bool {
        self.allow_delayed_start
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Clone, Debug)]
pub struct ConfigBuilder {
    address: Option<String>,
    websocket_address: Option<String>,
    timeout: Duration,
    allow_delayed_start: bool,
    user_agent: Option<String>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            address: None,
            websocket_address: None,
            timeout: DEFAULT_TIMEOUT,
            allow_delayed_start: false,
            user_agent: None,
        }
    }
}

impl ConfigBuilder {
    /// Address of the node's JSON-RPC endpoint. `http://` is assumed when no
    /// scheme is given.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Address of the node's WebSocket endpoint. Defaults to the JSON-RPC
    /// address.
    pub fn websocket_address(mut self, address: impl Into<String>) -> Self {
        self.websocket_address = Some(address.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Allows the service to start while the node is unreachable.
    pub fn allow_delayed_start(mut self, allow: bool) -> Self {
        self.allow_delayed_start = allow;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let address = self
            .address
            .filter(|address| !address.is_empty())
            .ok_or(ConfigError::NoAddress)?;
        if self.timeout.is_zero() {
            return Err(ConfigError::NoTimeout);
        }

        let url = parse_address(&address)?;
        let log_safe_address = mask(&url);
        let websocket_address = websocket_address(
            self.websocket_address
                .as_deref()
                .filter(|address| !address.is_empty())
                .unwrap_or(&address),
        );

        Ok(Config {
            url,
            log_safe_address,
            websocket_address,
            timeout: self.timeout,
            allow_delayed_start: self.allow_delayed_start,
            user_agent: self.user_agent.unwrap_or_else(|| {
                concat!("starknet-rpc-client/", env!("CARGO_PKG_VERSION")).to_owned()
            }),
        })
    }
}

fn parse_address(address: &str) -> Result<Url, ConfigError> {
    let mut url = if address.starts_with("http") {
        Url::parse(address)
    } else {
        Url::parse(&format!("http://{address}"))
    }
    .map_err(ConfigError::InvalidAddress)?;

    if let Some(path) = url.path().strip_suffix('/') {
        let path = path.to_owned();
        url.set_path(&path);
    }

    Ok(url)
}

/// Masks the password, a non-root path and every query value.
fn mask(url: &Url) -> String {
    let mut masked = url.clone();

    if masked.password().is_some() {
        // Cannot fail, the URL already carries credentials.
        let _ = masked.set_password(Some(MASK));
    }
    if !matches!(masked.path(), "" | "/") {
        masked.set_path(MASK);
    }
    if let Some(query) = masked.query() {
        let query = query
            .split('&')
            .map(|pair| match pair.split_once('=') {
                Some((key, _)) => format!("{key}={MASK}"),
                None => pair.to_owned(),
            })
            .collect::<Vec<_>>()
            .join("&");
        masked.set_query(Some(&query));
    }

    masked.to_string()
}

fn websocket_address(address: &str) -> String {
    if let Some(rest) = address.strip_prefix("http://") {
        format!("ws://{rest}")
    } else if let Some(rest) = address.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if address.starts_with("ws") {
        address.to_owned()
    } else {
        format!("ws://{address}")
    }
}
