//! Client library for [exchangeratesapi.io](https://exchangeratesapi.io/) style foreign-exchange
//! rate APIs.
//!
//! The [`Gexc`] facade converts amounts between currencies and looks rates up on the latest day,
//! on a given day or over a range of days:
//!
//! ```no_run
//! # use gexc::{Date, Gexc};
//! let gexc = Gexc::new();
//! println!("5 TRY = {} EUR", gexc.convert(5.0, "TRY", "EUR")?);
//! let rates = gexc.history_of("EUR").against(["USD"]).at(Date::from_ymd(2020, 12, 29).unwrap())?;
//! println!("1 EUR = {:?} USD on {}", rates.rate("USD"), rates.date);
//! # Ok::<(), gexc::Error>(())
//! ```
//!
//! Currency codes are resolved through the [`currency`] catalog before anything is sent, so
//! lowercase or padded input is accepted and unknown codes fail without a request.

#![deny(missing_docs)]

pub mod client;
pub mod config;
pub mod currency;
pub mod date;
pub mod response;

mod error;
pub use error::Error;

mod fluent;
pub use fluent::*;

pub use config::{Config, Protocol};
pub use currency::{currency_by_code, currency_by_name, Currency};
pub use date::Date;
