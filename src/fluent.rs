//! The fluent [`Gexc`] facade.
//!
//! Each step of a chain is a small value borrowing the facade; only the last step validates its
//! input and talks to the rates API.

use tracing::debug;

use crate::{
	client::{Client, HistoryParams, LatestParams, RatesApi, SingleDateParams},
	config::Config,
	currency::{Catalog, Currency},
	date::Date,
	response::{History, SingleDate},
	Error,
};

/// Currency conversion and rate lookups.
///
/// # Examples
/// ```no_run
/// # use gexc::{Date, Gexc};
/// let gexc = Gexc::new();
/// let euros = gexc.amount(5.0).from("try").to("eur")?;
/// let history = gexc
/// 	.history_of("EUR")
/// 	.against(["USD", "GBP"])
/// 	.from(Date::from_ymd(2020, 12, 1).unwrap())
/// 	.until(Date::from_ymd(2020, 12, 29).unwrap())?;
/// # Ok::<(), gexc::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Gexc<A = Client> {
	api: A,
	catalog: &'static Catalog,
}

impl Gexc {
	/// Creates a facade over the production API.
	pub fn new() -> Self {
		Self::with_config(Config::default())
	}

	/// Creates a facade over the API described by `config`.
	pub fn with_config(config: Config) -> Self {
		Self::with_api(Client::new(config))
	}
}

impl Default for Gexc {
	#[inline] fn default() -> Self { Self::new() }
}

impl<A: RatesApi> Gexc<A> {
	/// Creates a facade over the given API.
	pub fn with_api(api: A) -> Self {
		Self { api, catalog: Catalog::global() }
	}

	/// The underlying API.
	#[inline] pub fn api(&self) -> &A { &self.api }

	/// First step of a conversion: the amount to convert.
	#[inline] pub fn amount(&self, amount: f64) -> Amount<'_, A> {
		Amount { gexc: self, amount }
	}

	/// Converts `amount` of `from` into `to` at the latest rate.
	///
	/// Shorthand for `amount(amount).from(from).to(to)`.
	pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, Error> {
		self.amount(amount).from(from).to(to)
	}

	/// First step of a rate lookup: the base currency.
	pub fn history_of(&self, base: impl Into<String>) -> HistoryOf<'_, A> {
		HistoryOf { gexc: self, base: base.into() }
	}

	fn resolve(&self, code: &str) -> Result<Currency, Error> {
		self.catalog.by_code(code).ok_or_else(|| {
			debug!(code, "rejecting unsupported currency");
			Error::UnsupportedCurrency(code.to_owned())
		})
	}

	/// Resolves the base and the against-currencies into canonical codes, in order.
	fn resolve_all(&self, base: &str, against: &[String]) -> Result<(String, Vec<String>), Error> {
		let base = self.resolve(base)?;
		let against = against
			.iter()
			.map(|code| self.resolve(code).map(|currency| currency.code().to_owned()))
			.collect::<Result<_, _>>()?;
		Ok((base.code().to_owned(), against))
	}
}

/// An amount to convert. See [`Gexc::amount`].
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct Amount<'a, A> {
	gexc: &'a Gexc<A>,
	amount: f64,
}

impl<'a, A: RatesApi> Amount<'a, A> {
	/// Second step of a conversion: the currency to convert from.
	pub fn from(self, currency: impl Into<String>) -> Conversion<'a, A> {
		Conversion { gexc: self.gexc, amount: self.amount, from: currency.into() }
	}
}

/// An amount of a currency to convert. See [`Amount::from`].
#[derive(Debug, Clone)]
#[must_use]
pub struct Conversion<'a, A> {
	gexc: &'a Gexc<A>,
	amount: f64,
	from: String,
}

impl<A: RatesApi> Conversion<'_, A> {
	/// Last step of a conversion: converts into `currency` at the latest rate.
	pub fn to(&self, currency: &str) -> Result<f64, Error> {
		let from = self.gexc.resolve(&self.from)?;
		let to = self.gexc.resolve(currency)?;
		let response = self.gexc.api.latest(&LatestParams {
			base: from.code().to_owned(),
			symbols: vec![to.code().to_owned()],
		})?;
		let rate = response
			.rate(to.code())
			.ok_or_else(|| Error::RateNotFound(to.code().to_owned()))?;
		Ok(self.amount * rate)
	}
}

/// A base currency. See [`Gexc::history_of`].
#[derive(Debug, Clone)]
#[must_use]
pub struct HistoryOf<'a, A> {
	gexc: &'a Gexc<A>,
	base: String,
}

impl<'a, A: RatesApi> HistoryOf<'a, A> {
	/// Second step of a rate lookup: the currencies to get rates for.
	pub fn against<I>(self, currencies: I) -> Against<'a, A>
	where I: IntoIterator, I::Item: Into<String> {
		Against {
			gexc: self.gexc,
			base: self.base,
			against: currencies.into_iter().map(Into::into).collect(),
		}
	}
}

/// A base currency and the currencies to compare it against. See [`HistoryOf::against`].
#[derive(Debug, Clone)]
#[must_use]
pub struct Against<'a, A> {
	gexc: &'a Gexc<A>,
	base: String,
	against: Vec<String>,
}

impl<'a, A: RatesApi> Against<'a, A> {
	/// Third step of a history: the first day of the range.
	pub fn from(self, date: impl Into<Date>) -> Since<'a, A> {
		Since { against: self, from: date.into() }
	}

	/// Gets the latest rates.
	pub fn latest(&self) -> Result<SingleDate, Error> {
		let (base, symbols) = self.gexc.resolve_all(&self.base, &self.against)?;
		Ok(self.gexc.api.latest(&LatestParams { base, symbols })?)
	}

	/// Gets the rates on the given day.
	pub fn at(&self, date: impl Into<Date>) -> Result<SingleDate, Error> {
		let (base, symbols) = self.gexc.resolve_all(&self.base, &self.against)?;
		Ok(self.gexc.api.on_date(&SingleDateParams { date: date.into(), base, symbols })?)
	}
}

/// A rate lookup starting on a day. See [`Against::from`].
#[derive(Debug, Clone)]
#[must_use]
pub struct Since<'a, A> {
	against: Against<'a, A>,
	from: Date,
}

impl<A: RatesApi> Since<'_, A> {
	/// Last step of a history: gets the rates of every day from the start through `date`.
	///
	/// Both days must be set and `date` must come strictly after the start.
	pub fn until(&self, date: impl Into<Date>) -> Result<History, Error> {
		let until = date.into();
		if self.from.is_zero() || until.is_zero() {
			debug!(from = %self.from, until = %until, "rejecting unset history range");
			return Err(Error::InvalidParameter("time values should not be empty"));
		}
		if until <= self.from {
			debug!(from = %self.from, until = %until, "rejecting backwards history range");
			return Err(Error::InvalidParameter("until value should be bigger than from"));
		}
		let Against { gexc, base, against } = &self.against;
		let (base, symbols) = gexc.resolve_all(base, against)?;
		Ok(gexc.api.history(&HistoryParams { start_at: self.from, end_at: until, base, symbols })?)
	}
}
