//! [Currencies](Currency) and the [`Catalog`] used to resolve them.

use std::{
	collections::HashMap,
	fmt::{self, Display, Formatter},
	sync::OnceLock,
};

/// A currency supported by the rates provider.
///
/// It's recommended to use the constants in the [`list`] module, or to resolve
/// user input through [`currency_by_code`] and [`currency_by_name`].
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct Currency {
	/// The [ISO 4217](https://en.wikipedia.org/wiki/ISO_4217) code, uppercase.
	code: &'static str,
	/// The display name, lowercase.
	name: &'static str,
}

impl Currency {
	/// The uppercase ISO 4217 code, e.g. `EUR`.
	#[inline] pub const fn code(&self) -> &'static str { self.code }
	/// The lowercase display name, e.g. `euro`.
	#[inline] pub const fn name(&self) -> &'static str { self.name }
}

impl AsRef<str> for Currency {
	#[inline] fn as_ref(&self) -> &str { self.code }
}

impl Display for Currency {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.code.fmt(f)
	}
}

pub mod list {
	//! [Currency](super::Currency) constants.
	//!
	//! This module defines every supported currency as a constant, as well as
	//! [`ALL`] which contains all of them.

	use super::Currency;

	macro_rules! define_currencies {
		($($code:ident => $name:literal),* $(,)?) => {
			$(
				#[doc = concat!("The ", $name, " (`", stringify!($code), "`).")]
				pub const $code: Currency = Currency { code: stringify!($code), name: $name };
			)*
			/// Every currency defined in this module.
			pub const ALL: &[Currency] = &[ $( $code ),* ];
		};
	}

	// The reference-rate basket published by the provider.
	define_currencies! {
		USD => "us dollar",
		GBP => "pound sterling",
		EUR => "euro",
		JPY => "yen",
		BGN => "bulgarian lev",
		CZK => "czech koruna",
		DKK => "danish krone",
		HUF => "forint",
		PLN => "zloty",
		RON => "romanian leu",
		SEK => "swedish krona",
		CHF => "swiss franc",
		ISK => "iceland krona",
		NOK => "norwegian krone",
		HRK => "kuna",
		RUB => "russian ruble",
		TRY => "turkish lira",
		AUD => "australian dollar",
		BRL => "brazilian real",
		CAD => "canadian dollar",
		CNY => "yuan renminbi",
		HKD => "hong kong dollar",
		IDR => "rupiah",
		ILS => "new israeli sheqel",
		INR => "indian rupee",
		KRW => "won",
		MXN => "mexican peso",
		MYR => "malaysian ringgit",
		NZD => "new zealand dollar",
		PHP => "philippine peso",
		SGD => "singapore dollar",
		THB => "baht",
		ZAR => "rand",
	}
}

/// An immutable lookup table of [`Currency`] values, indexed by code and by name.
#[derive(Debug, Clone)]
pub struct Catalog {
	by_code: HashMap<&'static str, Currency>,
	by_name: HashMap<&'static str, Currency>,
}

impl Catalog {
	/// Builds a catalog from the given currencies.
	///
	/// Codes must be uppercase and names lowercase; a later duplicate replaces an earlier entry.
	pub fn new(currencies: impl IntoIterator<Item = Currency>) -> Self {
		let mut by_code = HashMap::new();
		let mut by_name = HashMap::new();
		for currency in currencies {
			by_code.insert(currency.code, currency);
			by_name.insert(currency.name, currency);
		}
		Self { by_code, by_name }
	}

	/// The process-wide catalog of every currency in [`list::ALL`].
	pub fn global() -> &'static Catalog {
		static GLOBAL: OnceLock<Catalog> = OnceLock::new();
		GLOBAL.get_or_init(|| Catalog::new(list::ALL.iter().copied()))
	}

	/// Looks a currency up by its ISO 4217 code, ignoring case and surrounding whitespace.
	pub fn by_code(&self, code: &str) -> Option<Currency> {
		self.by_code.get(code.trim().to_uppercase().as_str()).copied()
	}

	/// Looks a currency up by its display name, ignoring case and surrounding whitespace.
	pub fn by_name(&self, name: &str) -> Option<Currency> {
		self.by_name.get(name.trim().to_lowercase().as_str()).copied()
	}

	/// Gets the count of currencies.
	#[inline] pub fn len(&self) -> usize { self.by_code.len() }
	/// Gets whether the catalog is empty.
	#[inline] pub fn is_empty(&self) -> bool { self.by_code.is_empty() }

	/// Iterates over the currencies, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = Currency> + '_ {
		self.by_code.values().copied()
	}
}

impl Default for Catalog {
	#[inline] fn default() -> Self { Self::global().clone() }
}

/// Looks a currency up by code in the [global catalog](Catalog::global).
///
/// ```
/// # use gexc::currency::{currency_by_code, list};
/// assert_eq!(currency_by_code(" try "), Some(list::TRY));
/// ```
#[inline]
pub fn currency_by_code(code: &str) -> Option<Currency> {
	Catalog::global().by_code(code)
}

/// Looks a currency up by name in the [global catalog](Catalog::global).
///
/// ```
/// # use gexc::currency::{currency_by_name, list};
/// assert_eq!(currency_by_name("Forint"), Some(list::HUF));
/// ```
#[inline]
pub fn currency_by_name(name: &str) -> Option<Currency> {
	Catalog::global().by_name(name)
}
