//! HTTP [`Client`] of the rates API.

mod params;
pub use params::*;

pub mod query;

mod transport;
pub use transport::*;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use self::query::ToQuery;
use crate::{
	config::Config,
	date::FormatError,
	response::{ErrorResponse, History, SingleDate},
};

/// The rates API operations.
///
/// [`Gexc`](crate::Gexc) talks to the API through this trait, so it can be backed by
/// something other than a [`Client`].
pub trait RatesApi {
	/// Rates on the latest available day.
	fn latest(&self, params: &LatestParams) -> Result<SingleDate, Error>;
	/// Rates on the given day.
	fn on_date(&self, params: &SingleDateParams) -> Result<SingleDate, Error>;
	/// Rates over a range of days.
	fn history(&self, params: &HistoryParams) -> Result<History, Error>;
}

impl<A: RatesApi + ?Sized> RatesApi for &A {
	#[inline] fn latest(&self, params: &LatestParams) -> Result<SingleDate, Error> { (**self).latest(params) }
	#[inline] fn on_date(&self, params: &SingleDateParams) -> Result<SingleDate, Error> { (**self).on_date(params) }
	#[inline] fn history(&self, params: &HistoryParams) -> Result<History, Error> { (**self).history(params) }
}

/// Client of an exchangeratesapi.io compatible API.
///
/// Every operation issues exactly one GET request through the [`Transport`].
///
/// # Examples
/// ```
/// # use gexc::{Config, client::{Client, LatestParams, RatesApi, RawResponse, TransportError}};
/// let transport = |url: &str| -> Result<RawResponse, TransportError> {
/// 	assert_eq!(url, "https://api.exchangeratesapi.io/latest?base=EUR&symbols=USD");
/// 	Ok(RawResponse::ok(r#"{"base":"EUR","rates":{"USD":1.22},"date":"2020-12-29"}"#))
/// };
/// let client = Client::with_transport(Config::default(), transport);
/// let params = LatestParams { base: "EUR".into(), symbols: vec!["USD".into()] };
/// assert_eq!(client.latest(&params).unwrap().rate("USD"), Some(1.22));
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = ReqwestTransport> {
	config: Config,
	transport: T,
}

impl Client {
	/// Creates a client over a [`ReqwestTransport`].
	pub fn new(config: Config) -> Self {
		Self::with_transport(config, ReqwestTransport::new())
	}
}

impl Default for Client {
	#[inline] fn default() -> Self { Self::new(Config::default()) }
}

impl<T: Transport> Client<T> {
	/// Creates a client over the given transport.
	pub fn with_transport(config: Config, transport: T) -> Self {
		Self { config, transport }
	}

	/// The client's configuration.
	#[inline] pub fn config(&self) -> &Config { &self.config }

	/// Builds the URL of `path` with the given encoded query.
	pub(crate) fn to_url(&self, path: &str, query: &str) -> String {
		let mut url = self.config.origin();
		url.push_str(path);
		if !query.is_empty() {
			url.push('?');
			url.push_str(query);
		}
		url
	}

	/// Sends the request.
	///
	/// # Panics
	/// On any method but GET; nothing else is ever sent to the API.
	fn do_request(&self, method: Method, url: &str) -> Result<RawResponse, Error> {
		if method != Method::GET {
			panic!("unsupported method: {method}");
		}
		debug!(%url, "sending request");
		let response = self.transport.get(url)?;
		debug!(status = response.status, bytes = response.body.len(), "received response");
		Ok(response)
	}

	fn parse_response<R: DeserializeOwned>(&self, response: RawResponse) -> Result<R, Error> {
		if !response.is_success() {
			let ErrorResponse { error } = serde_json::from_slice(&response.body)?;
			warn!(status = response.status, %error, "request failed");
			return Err(Error::RequestFailed { status: response.status, message: error });
		}
		Ok(serde_json::from_slice(&response.body)?)
	}

	fn fetch<R: DeserializeOwned>(&self, path: &str, params: &impl ToQuery) -> Result<R, Error> {
		let query = params.to_query()?;
		let url = self.to_url(path, query.as_str());
		let response = self.do_request(Method::GET, &url)?;
		self.parse_response(response)
	}
}

impl<T: Transport> RatesApi for Client<T> {
	fn latest(&self, params: &LatestParams) -> Result<SingleDate, Error> {
		self.fetch("/latest", params)
	}

	fn on_date(&self, params: &SingleDateParams) -> Result<SingleDate, Error> {
		let date = params.date.format()?;
		self.fetch(&format!("/{date}"), params)
	}

	fn history(&self, params: &HistoryParams) -> Result<History, Error> {
		self.fetch("/history", params)
	}
}

/// An error from the rates API or from the transport.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// No response was received.
	#[error("transport error: {0}")]
	Transport(#[from] TransportError),
	/// The API answered with a status other than `200 OK`.
	#[error("request failed: {message}")]
	RequestFailed {
		/// The HTTP status code.
		status: u16,
		/// The API's error message.
		message: String,
	},
	/// The response body could not be bound.
	#[error("error while binding response: {0}")]
	Decode(#[from] serde_json::Error),
	/// A date parameter could not be written.
	#[error("invalid date parameter: {0}")]
	Date(#[from] FormatError),
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;
	use crate::{config::Protocol, date::Date};

	const LATEST: &str = r#"{"base":"TRY","rates":{"EUR":8.0,"GBP":9.0,"USD":7.0},"date":"2020-12-29"}"#;

	/// A transport answering `response` and recording requested URLs.
	fn recording<'a>(status: u16, body: &'static str, urls: &'a Mutex<Vec<String>>) -> impl Fn(&str) -> Result<RawResponse, TransportError> + 'a {
		move |url: &str| {
			urls.lock().unwrap().push(url.to_owned());
			Ok(RawResponse::new(status, body))
		}
	}

	fn latest_params() -> LatestParams {
		LatestParams { base: "TRY".into(), symbols: vec!["EUR".into(), "GBP".into()] }
	}

	#[test]
	fn test_to_url() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(200, "", &urls));
		assert_eq!(client.to_url("/path", ""), "https://api.exchangeratesapi.io/path");
		assert_eq!(
			client.to_url("/path", "qp1=true&qp2=false"),
			"https://api.exchangeratesapi.io/path?qp1=true&qp2=false",
		);
	}

	#[test]
	fn test_to_url_custom_config() {
		let config = Config::default().base_url("localhost").protocol(Protocol::Http).port(Some(8080));
		let urls = Mutex::default();
		let client = Client::with_transport(config, recording(200, "", &urls));
		assert_eq!(client.to_url("/latest", "base=EUR"), "http://localhost:8080/latest?base=EUR");
	}

	#[test]
	fn test_do_request_get() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(200, "Hello World", &urls));
		let response = client.do_request(Method::GET, "https://example.test/").unwrap();
		assert_eq!(response, RawResponse::ok("Hello World"));
		assert_eq!(*urls.lock().unwrap(), ["https://example.test/"]);
	}

	#[test]
	#[should_panic(expected = "unsupported method: POST")]
	fn test_do_request_rejects_other_methods() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(200, "", &urls));
		let _ = client.do_request(Method::POST, "https://example.test/");
	}

	#[test]
	fn test_latest() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(200, LATEST, &urls));
		let response = client.latest(&latest_params()).unwrap();
		assert_eq!(response.base, "TRY");
		assert_eq!(response.rate("EUR"), Some(8.0));
		assert_eq!(response.date, Date::from_ymd(2020, 12, 29).unwrap());
		assert_eq!(*urls.lock().unwrap(), ["https://api.exchangeratesapi.io/latest?base=TRY&symbols=EUR,GBP"]);
	}

	#[test]
	fn test_on_date() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(200, LATEST, &urls));
		let params = SingleDateParams {
			date: Date::from_ymd(2020, 11, 29).unwrap(),
			base: "TRY".into(),
			symbols: vec!["USD".into()],
		};
		client.on_date(&params).unwrap();
		assert_eq!(*urls.lock().unwrap(), ["https://api.exchangeratesapi.io/2020-11-29?base=TRY&symbols=USD"]);
	}

	#[test]
	fn test_on_date_unset_makes_no_request() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(200, LATEST, &urls));
		let params = SingleDateParams { base: "TRY".into(), ..Default::default() };
		assert!(matches!(client.on_date(&params), Err(Error::Date(FormatError::Unset))));
		assert!(urls.lock().unwrap().is_empty());
	}

	#[test]
	fn test_history() {
		let body = r#"{"base":"TRY","start_at":"2020-12-27","end_at":"2020-12-28","rates":{"2020-12-27":{"EUR":6.0},"2020-12-28":{"EUR":7.0}}}"#;
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(200, body, &urls));
		let params = HistoryParams {
			start_at: Date::from_ymd(2020, 12, 27).unwrap(),
			end_at: Date::from_ymd(2020, 12, 28).unwrap(),
			base: "TRY".into(),
			symbols: vec!["EUR".into()],
		};
		let response = client.history(&params).unwrap();
		assert_eq!(response.rates.len(), 2);
		assert_eq!(response.end_at, params.end_at);
		assert_eq!(
			*urls.lock().unwrap(),
			["https://api.exchangeratesapi.io/history?base=TRY&symbols=EUR&start_at=2020-12-27&end_at=2020-12-28"],
		);
	}

	#[test]
	fn test_error_envelope() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(400, r#"{"error":"bad request"}"#, &urls));
		match client.latest(&latest_params()) {
			Err(Error::RequestFailed { status, message }) => {
				assert_eq!(status, 400);
				assert_eq!(message, "bad request");
			}
			other => panic!("unexpected {other:?}"),
		}
	}

	#[test]
	fn test_bad_error_envelope() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(500, "<html>oops</html>", &urls));
		assert!(matches!(client.latest(&latest_params()), Err(Error::Decode(_))));
	}

	#[test]
	fn test_bad_success_body() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(200, r#"{"base":1}"#, &urls));
		assert!(matches!(client.latest(&latest_params()), Err(Error::Decode(_))));
	}

	#[test]
	fn test_no_content_is_not_success() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(204, "", &urls));
		assert!(matches!(client.latest(&latest_params()), Err(Error::Decode(_))));
	}

	#[test]
	fn test_query_values_are_escaped() {
		let urls = Mutex::default();
		let client = Client::with_transport(Config::default(), recording(200, LATEST, &urls));
		let params = LatestParams { base: "EUR&symbols=JPY".into(), symbols: vec!["US D".into()] };
		client.latest(&params).unwrap();
		assert_eq!(
			*urls.lock().unwrap(),
			["https://api.exchangeratesapi.io/latest?base=EUR%26symbols%3DJPY&symbols=US%20D"],
		);
	}

	#[test]
	fn test_transport_error() {
		let transport = |_: &str| -> Result<RawResponse, TransportError> { Err(TransportError::new("connection refused")) };
		let client = Client::with_transport(Config::default(), transport);
		let error = client.latest(&latest_params()).unwrap_err();
		assert!(matches!(error, Error::Transport(_)));
		assert_eq!(error.to_string(), "transport error: connection refused");
	}
}
