//! [`Date`], the day-precision date exchanged with the rates API.

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// The `strftime` layout of a [`Date`] on the wire.
pub const LAYOUT: &str = "%Y-%m-%d";

/// The literal standing for the [zero date](Date::ZERO) in text.
const NULL: &str = "null";

/// A calendar date rendered as `YYYY-MM-DD`, or the zero (unset) date.
///
/// The zero date compares below every real date.
///
/// # Examples
/// ```
/// # use gexc::Date;
/// let date: Date = "2020-12-29".parse().unwrap();
/// assert_eq!(date.format().unwrap(), "2020-12-29");
/// assert!("null".parse::<Date>().unwrap().is_zero());
/// ```
#[repr(transparent)]
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct Date(Option<NaiveDate>);

impl Date {
	/// The zero (unset) date.
	pub const ZERO: Date = Date(None);

	/// Wraps a calendar date.
	#[inline] pub const fn new(date: NaiveDate) -> Self { Self(Some(date)) }

	/// Creates a date from its parts, if they form a valid calendar date.
	pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
		NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
	}

	/// Gets whether this is the [zero date](Self::ZERO).
	#[inline] pub const fn is_zero(&self) -> bool { self.0.is_none() }

	/// The wrapped calendar date, [`None`] for the zero date.
	#[inline] pub const fn naive(&self) -> Option<NaiveDate> { self.0 }

	/// Renders the date as `YYYY-MM-DD`.
	pub fn format(&self) -> Result<String, FormatError> {
		let date = self.0.ok_or(FormatError::Unset)?;
		let year = date.year();
		if !(0..=9999).contains(&year) {
			return Err(FormatError::YearOutOfRange(year));
		}
		Ok(date.format(LAYOUT).to_string())
	}

	/// Parses `YYYY-MM-DD`, or `null` as the [zero date](Self::ZERO).
	pub fn parse(text: &str) -> Result<Self, ParseError> {
		if text == NULL {
			return Ok(Self::ZERO);
		}
		if !is_layout(text.as_bytes()) {
			return Err(ParseError::Layout(text.to_owned()));
		}
		Ok(Self::new(NaiveDate::parse_from_str(text, LAYOUT)?))
	}
}

/// Checks the exact `dddd-dd-dd` shape; chrono alone also accepts signs and short fields.
fn is_layout(text: &[u8]) -> bool {
	text.len() == 10
		&& text.iter().enumerate().all(|(i, &c)| match i {
			4 | 7 => c == b'-',
			_ => c.is_ascii_digit(),
		})
}

impl From<NaiveDate> for Date {
	#[inline] fn from(date: NaiveDate) -> Self { Self::new(date) }
}

/// Keeps the UTC calendar day, dropping the time of day.
impl From<DateTime<Utc>> for Date {
	#[inline] fn from(datetime: DateTime<Utc>) -> Self { Self::new(datetime.date_naive()) }
}

impl From<Option<NaiveDate>> for Date {
	#[inline] fn from(date: Option<NaiveDate>) -> Self { Self(date) }
}

impl FromStr for Date {
	type Err = ParseError;
	#[inline] fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

/// Writes the [layout](LAYOUT) without the range check of [`Date::format`], `null` for zero.
impl Display for Date {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self.0 {
			Some(date) => date.format(LAYOUT).fmt(f),
			None => NULL.fmt(f),
		}
	}
}

impl Serialize for Date {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		if self.is_zero() {
			return serializer.serialize_none();
		}
		let text = self.format().map_err(<S::Error as ser::Error>::custom)?;
		serializer.serialize_str(&text)
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		match Option::<String>::deserialize(deserializer)? {
			Some(text) => Self::parse(&text).map_err(de::Error::custom),
			None => Ok(Self::ZERO),
		}
	}
}

/// Failure to render a [`Date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
	/// The year cannot be written with four digits.
	#[error("year {0} outside of range [0,9999]")]
	YearOutOfRange(i32),
	/// The zero date has no text form.
	#[error("date is not set")]
	Unset,
}

/// Failure to read a [`Date`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	/// The text is not shaped like `YYYY-MM-DD`.
	#[error("'{0}' does not match the YYYY-MM-DD layout")]
	Layout(String),
	/// The text is shaped right but is not a calendar date.
	#[error("invalid date: {0}")]
	Invalid(#[from] chrono::ParseError),
}
