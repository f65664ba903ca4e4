//! Response payloads of the rates API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Rates of one unit of the base currency, keyed by currency code.
pub type RateItem = BTreeMap<String, f64>;

/// [`RateItem`]s keyed by their `YYYY-MM-DD` day.
pub type TimeRateItem = BTreeMap<String, RateItem>;

/// Rates on a single day, the answer of the `latest` and `on_date` endpoints.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleDate {
	/// The base currency code.
	pub base: String,
	/// The rates against the base currency.
	pub rates: RateItem,
	/// The day the rates were published for.
	#[serde(default)]
	pub date: Date,
}

impl SingleDate {
	/// Gets the rate for the given currency code, if present.
	pub fn rate(&self, code: &str) -> Option<f64> {
		self.rates.get(code).copied()
	}
}

/// Rates over a range of days, the answer of the `history` endpoint.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
	/// The base currency code.
	pub base: String,
	/// The first day of the range.
	#[serde(default)]
	pub start_at: Date,
	/// The last day of the range.
	#[serde(default)]
	pub end_at: Date,
	/// The rates per day.
	pub rates: TimeRateItem,
}

impl History {
	/// Iterates over the days and their rates, oldest first.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &RateItem)> {
		self.rates.iter().map(|(day, rates)| (day.as_str(), rates))
	}

	/// Gets the rates of the given day.
	pub fn on(&self, date: Date) -> Option<&RateItem> {
		self.rates.get(&date.format().ok()?)
	}
}

/// Body of a non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ErrorResponse {
	pub error: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_single_date() {
		let json = r#"{"base":"TRY","rates":{"EUR":8.0,"GBP":9.0,"USD":7.0},"date":"2020-12-29"}"#;
		let response: SingleDate = serde_json::from_str(json).unwrap();
		assert_eq!(response.base, "TRY");
		assert_eq!(response.date, Date::from_ymd(2020, 12, 29).unwrap());
		assert_eq!(response.rate("GBP"), Some(9.0));
		assert_eq!(response.rate("JPY"), None);
	}

	#[test]
	fn test_history() {
		let json = r#"{
			"base": "EUR",
			"start_at": "2020-12-27",
			"end_at": "2020-12-29",
			"rates": {
				"2020-12-29": {"USD": 1.22},
				"2020-12-28": {"USD": 1.21}
			}
		}"#;
		let response: History = serde_json::from_str(json).unwrap();
		assert_eq!(response.start_at, Date::from_ymd(2020, 12, 27).unwrap());
		assert_eq!(response.end_at, Date::from_ymd(2020, 12, 29).unwrap());
		let days: Vec<_> = response.iter().map(|(day, _)| day).collect();
		assert_eq!(days, ["2020-12-28", "2020-12-29"]);
		let day = Date::from_ymd(2020, 12, 29).unwrap();
		assert_eq!(response.on(day).and_then(|rates| rates.get("USD")), Some(&1.22));
		assert_eq!(response.on(Date::ZERO), None);
	}

	#[test]
	fn test_null_date() {
		let json = r#"{"base":"USD","rates":{},"date":null}"#;
		let response: SingleDate = serde_json::from_str(json).unwrap();
		assert!(response.date.is_zero());
	}

	#[test]
	fn test_error_response() {
		let response: ErrorResponse = serde_json::from_str(r#"{"error":"bad request"}"#).unwrap();
		assert_eq!(response.error, "bad request");
	}
}
