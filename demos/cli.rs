use clap::{Parser, Subcommand};
use gexc::{currency::Catalog, Config, Date, Gexc, Protocol};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
pub struct Cli {
	/// API host, overrides GEXC_BASE_URL.
	#[clap(long)]
	base_url: Option<String>,
	/// http or https, overrides GEXC_PROTOCOL.
	#[clap(long)]
	protocol: Option<Protocol>,
	/// API port, overrides GEXC_PORT.
	#[clap(long)]
	port: Option<u16>,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	/// Converts an amount at the latest rate.
	Convert {
		amount: f64,
		from: String,
		to: String,
	},
	/// Latest rates of a base currency.
	Latest {
		base: String,
		against: Vec<String>,
	},
	/// Rates of a base currency on a day.
	At {
		date: Date,
		base: String,
		against: Vec<String>,
	},
	/// Rates of a base currency over a range of days.
	History {
		base: String,
		from: Date,
		until: Date,
		against: Vec<String>,
	},
	/// Lists the supported currencies.
	Currencies,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	dotenvy::dotenv().ok();
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	let mut config = Config::from_env()?;
	if let Some(base_url) = cli.base_url { config.base_url = base_url; }
	if let Some(protocol) = cli.protocol { config.protocol = protocol; }
	if cli.port.is_some() { config.port = cli.port; }
	let gexc = Gexc::with_config(config);

	match cli.command {
		CliCommand::Convert { amount, from, to } => {
			println!("{} {} = {} {}", amount, from, gexc.convert(amount, &from, &to)?, to);
		}
		CliCommand::Latest { base, against } => {
			let response = gexc.history_of(base).against(against).latest()?;
			println!("Rates of {} as of {}", response.base, response.date);
			for (currency, rate) in &response.rates { println!("{currency} {rate}"); }
		}
		CliCommand::At { date, base, against } => {
			let response = gexc.history_of(base).against(against).at(date)?;
			println!("Rates of {} on {}", response.base, response.date);
			for (currency, rate) in &response.rates { println!("{currency} {rate}"); }
		}
		CliCommand::History { base, from, until, against } => {
			let history = gexc.history_of(base).against(against).from(from).until(until)?;
			println!("Rates of {} from {} until {}", history.base, history.start_at, history.end_at);
			for (day, rates) in history.iter() {
				for (currency, rate) in rates { println!("{day} {currency} {rate}"); }
			}
		}
		CliCommand::Currencies => {
			let mut currencies: Vec<_> = Catalog::global().iter().collect();
			currencies.sort();
			for currency in currencies { println!("{} {}", currency.code(), currency.name()); }
		}
	}
	Ok(())
}
