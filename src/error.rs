//! [`Error`] type.

use crate::client;

/// An error from the [`Gexc`](crate::Gexc) facade.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The currency is not in the [catalog](crate::currency::Catalog).
	#[error("unsupported currency: {0}")]
	UnsupportedCurrency(String),
	/// The response has no rate for the currency.
	#[error("currency not found in data: {0}")]
	RateNotFound(String),
	/// A parameter was rejected before sending anything.
	#[error("invalid parameter: {0}")]
	InvalidParameter(&'static str),
	/// The rates API call failed.
	#[error("client failed: {0}")]
	ClientFailed(#[from] client::Error),
}
