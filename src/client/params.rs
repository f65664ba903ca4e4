//! Request parameters of the rates API endpoints.

use super::query::{Base, DateParam, Query, Symbols, ToQuery};
use crate::date::{Date, FormatError};

/// Parameters of the `latest` endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LatestParams {
	/// The base currency code.
	pub base: String,
	/// The currency codes to get rates for; all when empty.
	pub symbols: Vec<String>,
}

/// Parameters of the single-day endpoint.
///
/// The date is part of the path, not of the query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SingleDateParams {
	/// The day to get rates for.
	pub date: Date,
	/// The base currency code.
	pub base: String,
	/// The currency codes to get rates for; all when empty.
	pub symbols: Vec<String>,
}

/// Parameters of the `history` endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HistoryParams {
	/// The first day of the range.
	pub start_at: Date,
	/// The last day of the range.
	pub end_at: Date,
	/// The base currency code.
	pub base: String,
	/// The currency codes to get rates for; all when empty.
	pub symbols: Vec<String>,
}

impl ToQuery for LatestParams {
	fn to_query(&self) -> Result<Query, FormatError> {
		let mut query = Query::new();
		query.push(Base(&self.base))?.push(Symbols(&self.symbols))?;
		Ok(query)
	}
}

impl ToQuery for SingleDateParams {
	fn to_query(&self) -> Result<Query, FormatError> {
		let mut query = Query::new();
		query.push(Base(&self.base))?.push(Symbols(&self.symbols))?;
		Ok(query)
	}
}

impl ToQuery for HistoryParams {
	fn to_query(&self) -> Result<Query, FormatError> {
		let mut query = Query::new();
		query
			.push(Base(&self.base))?
			.push(Symbols(&self.symbols))?
			.push(DateParam { key: "start_at", date: self.start_at })?
			.push(DateParam { key: "end_at", date: self.end_at })?;
		Ok(query)
	}
}
