//! [`Config`] of the rates API endpoint.

use std::{
	env,
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::Deserialize;

/// The host of the production rates API.
pub const DEFAULT_BASE_URL: &str = "api.exchangeratesapi.io";

/// URL scheme used to reach the rates API.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
	/// Plain `http`.
	Http,
	/// `https`, the default.
	#[default]
	Https,
}

impl Protocol {
	/// The URL scheme.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Protocol::Http => "http",
			Protocol::Https => "https",
		}
	}
}

impl Display for Protocol {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.as_str().fmt(f)
	}
}

impl FromStr for Protocol {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"http" => Ok(Protocol::Http),
			"https" => Ok(Protocol::Https),
			_ => Err(ConfigError::InvalidProtocol(s.to_owned())),
		}
	}
}

/// Where the rates API lives.
///
/// # Examples
/// ```
/// # use gexc::{Config, Protocol};
/// let config = Config::default();
/// assert_eq!(config.base_url, "api.exchangeratesapi.io");
/// assert_eq!(config.protocol, Protocol::Https);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
	/// The API host, without scheme or path.
	pub base_url: String,
	/// The URL scheme.
	pub protocol: Protocol,
	/// An explicit port; the scheme's default when [`None`].
	pub port: Option<u16>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_owned(),
			protocol: Protocol::default(),
			port: None,
		}
	}
}

impl Config {
	/// Loads configuration from the environment, falling back to the defaults.
	///
	/// Reads `GEXC_BASE_URL`, `GEXC_PROTOCOL` and `GEXC_PORT`.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let mut config = Self::default();
		if let Some(base_url) = lookup("GEXC_BASE_URL") {
			config.base_url = base_url;
		}
		if let Some(protocol) = lookup("GEXC_PROTOCOL") {
			config.protocol = protocol.parse()?;
		}
		if let Some(port) = lookup("GEXC_PORT") {
			config.port = Some(port.trim().parse().map_err(|_| ConfigError::InvalidPort(port))?);
		}
		Ok(config)
	}

	/// Sets the [`base_url`](Config::base_url).
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Sets the [`protocol`](Config::protocol).
	pub fn protocol(mut self, protocol: Protocol) -> Self {
		self.protocol = protocol;
		self
	}

	/// Sets the [`port`](Config::port).
	pub fn port(mut self, port: Option<u16>) -> Self {
		self.port = port;
		self
	}

	/// The `scheme://host[:port]` prefix of every request URL.
	pub fn origin(&self) -> String {
		match self.port {
			Some(port) => format!("{}://{}:{}", self.protocol, self.base_url, port),
			None => format!("{}://{}", self.protocol, self.base_url),
		}
	}
}

/// An invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	/// The protocol is neither `http` nor `https`.
	#[error("invalid protocol '{0}', expected http or https")]
	InvalidProtocol(String),
	/// The port is not a number in `[0, 65535]`.
	#[error("invalid port '{0}'")]
	InvalidPort(String),
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn lookup<'a>(vars: &'a HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> + 'a {
		move |key: &str| vars.get(key).map(|value| value.to_string())
	}

	#[test]
	fn test_default_origin() {
		assert_eq!(Config::default().origin(), "https://api.exchangeratesapi.io");
	}

	#[test]
	fn test_origin_with_port() {
		let config = Config::default().base_url("localhost").protocol(Protocol::Http).port(Some(8080));
		assert_eq!(config.origin(), "http://localhost:8080");
	}

	#[test]
	fn test_protocol_parse() {
		assert_eq!(" HTTP ".parse::<Protocol>(), Ok(Protocol::Http));
		assert_eq!("https".parse::<Protocol>(), Ok(Protocol::Https));
		assert_eq!("ftp".parse::<Protocol>(), Err(ConfigError::InvalidProtocol("ftp".into())));
	}

	#[test]
	fn test_from_lookup() {
		let vars = HashMap::from([
			("GEXC_BASE_URL", "rates.internal"),
			("GEXC_PROTOCOL", "http"),
			("GEXC_PORT", "9000"),
		]);
		let config = Config::from_lookup(lookup(&vars)).unwrap();
		assert_eq!(config, Config { base_url: "rates.internal".into(), protocol: Protocol::Http, port: Some(9000) });
	}

	#[test]
	fn test_from_lookup_defaults() {
		let vars = HashMap::new();
		assert_eq!(Config::from_lookup(lookup(&vars)).unwrap(), Config::default());
	}

	#[test]
	fn test_from_lookup_invalid_port() {
		let vars = HashMap::from([("GEXC_PORT", "http")]);
		assert_eq!(Config::from_lookup(lookup(&vars)), Err(ConfigError::InvalidPort("http".into())));
	}

	#[test]
	fn test_deserialize_partial() {
		let config: Config = serde_json::from_str(r#"{"protocol":"http"}"#).unwrap();
		assert_eq!(config.base_url, DEFAULT_BASE_URL);
		assert_eq!(config.protocol, Protocol::Http);
		assert_eq!(config.port, None);
	}
}
