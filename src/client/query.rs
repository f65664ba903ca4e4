//! Query string building.
//!
//! Values are percent-encoded; keys and the `,` between symbols are written as is.

use std::fmt::Write;

use urlencoding::encode;

use crate::date::{Date, FormatError};

/// A piece of a query string.
pub trait QueryPart {
	/// Writes the part into the query, preceded by `prefix`.
	///
	/// Returns whether anything was written; nothing, not even the prefix, is written otherwise.
	fn write_query_part(&self, query: &mut String, prefix: &str) -> Result<bool, FormatError>;
}

impl<Inner: QueryPart> QueryPart for Option<Inner> {
	#[inline] fn write_query_part(&self, query: &mut String, prefix: &str) -> Result<bool, FormatError> {
		match self {
			Some(inner) => inner.write_query_part(query, prefix),
			None => Ok(false),
		}
	}
}

/// The `base` currency parameter; omitted when empty.
pub struct Base<'a>(pub &'a str);

impl QueryPart for Base<'_> {
	fn write_query_part(&self, query: &mut String, prefix: &str) -> Result<bool, FormatError> {
		if self.0.is_empty() {
			return Ok(false);
		}
		query.push_str(prefix);
		query.push_str("base=");
		query.push_str(&encode(self.0));
		Ok(true)
	}
}

/// The comma-separated `symbols` parameter; omitted when empty.
pub struct Symbols<'a, T>(pub &'a [T]);

impl<T: AsRef<str>> QueryPart for Symbols<'_, T> {
	fn write_query_part(&self, query: &mut String, prefix: &str) -> Result<bool, FormatError> {
		let mut symbols = self.0.iter();
		let Some(head) = symbols.next() else { return Ok(false) };
		query.push_str(prefix);
		query.push_str("symbols=");
		query.push_str(&encode(head.as_ref()));
		for symbol in symbols {
			query.push(',');
			query.push_str(&encode(symbol.as_ref()));
		}
		Ok(true)
	}
}

/// A date parameter in the fixed `YYYY-MM-DD` layout.
pub struct DateParam<'a> {
	/// The query key.
	pub key: &'a str,
	/// The value; must be formattable.
	pub date: Date,
}

impl QueryPart for DateParam<'_> {
	fn write_query_part(&self, query: &mut String, prefix: &str) -> Result<bool, FormatError> {
		let date = self.date.format()?;
		// writing into a String cannot fail
		let _ = write!(query, "{prefix}{}={}", self.key, encode(&date));
		Ok(true)
	}
}

/// Accumulates [`QueryPart`]s, separating them with `&`.
#[derive(Debug, Default)]
pub struct Query(String);

impl Query {
	/// Creates an empty query.
	#[inline] pub fn new() -> Self { Self::default() }

	/// Appends a part.
	pub fn push(&mut self, part: impl QueryPart) -> Result<&mut Self, FormatError> {
		let prefix = if self.0.is_empty() { "" } else { "&" };
		part.write_query_part(&mut self.0, prefix)?;
		Ok(self)
	}

	/// The encoded query, without the leading `?`.
	#[inline] pub fn as_str(&self) -> &str { &self.0 }
	/// Gets whether no part was written.
	#[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }
	/// Unwraps the encoded query.
	#[inline] pub fn into_string(self) -> String { self.0 }
}

/// Encodes the request parameters as a query string.
pub trait ToQuery {
	/// Builds the query.
	fn to_query(&self) -> Result<Query, FormatError>;
}
