//! [`Transport`], the seam between the [`Client`](super::Client) and the network.

use std::{
	error::Error as StdError,
	fmt::{self, Display, Formatter},
};

/// Status and body of an HTTP response.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawResponse {
	/// The HTTP status code.
	pub status: u16,
	/// The raw body.
	pub body: Vec<u8>,
}

impl RawResponse {
	/// Creates a response.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Creates a `200 OK` response.
	#[inline] pub fn ok(body: impl Into<Vec<u8>>) -> Self { Self::new(200, body) }

	/// Gets whether the status is `200 OK`, the only status the API answers rates with.
	#[inline] pub const fn is_success(&self) -> bool { self.status == 200 }
}

/// A failure to get a response at all.
#[derive(Debug)]
pub struct TransportError(Box<dyn StdError + Send + Sync>);

impl TransportError {
	/// Wraps any error.
	pub fn new(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
		Self(error.into())
	}
}

impl Display for TransportError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl StdError for TransportError {
	fn source(&self) -> Option<&(dyn StdError + 'static)> { self.0.source() }
}

impl From<reqwest::Error> for TransportError {
	#[inline] fn from(error: reqwest::Error) -> Self { Self::new(error) }
}

/// Performs HTTP GET requests.
///
/// Implemented by [`ReqwestTransport`] and by any `Fn(&str) -> Result<RawResponse, TransportError>`.
///
/// # Examples
/// ```
/// # use gexc::client::{RawResponse, Transport, TransportError};
/// let transport = |_url: &str| -> Result<RawResponse, TransportError> {
/// 	Ok(RawResponse::ok(r#"{"base":"EUR","rates":{},"date":"2020-12-29"}"#))
/// };
/// assert_eq!(transport.get("https://example.test/latest").unwrap().status, 200);
/// ```
pub trait Transport {
	/// Sends a GET request to `url`.
	fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

impl<F> Transport for F
where F: Fn(&str) -> Result<RawResponse, TransportError> {
	#[inline] fn get(&self, url: &str) -> Result<RawResponse, TransportError> { self(url) }
}

/// [`Transport`] backed by a blocking [`reqwest`] client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	client: reqwest::blocking::Client,
}

impl ReqwestTransport {
	/// Creates a transport with default settings.
	pub fn new() -> Self {
		let client = reqwest::blocking::Client::builder()
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.build()
			.unwrap_or_else(|_| reqwest::blocking::Client::new());
		Self { client }
	}

	/// Creates a transport around the given client.
	pub fn with_client(client: reqwest::blocking::Client) -> Self {
		Self { client }
	}
}

impl Default for ReqwestTransport {
	#[inline] fn default() -> Self { Self::new() }
}

impl Transport for ReqwestTransport {
	fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
		let response = self.client.get(url).send()?;
		let status = response.status().as_u16();
		let body = response.bytes()?.to_vec();
		Ok(RawResponse { status, body })
	}
}
