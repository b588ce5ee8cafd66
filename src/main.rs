//! Gift Aid calculator: works out the tax a UK charity and a higher rate
//! giver can reclaim on a donation.
//!
//! ```bash
//! gift-aid calc 100 --rate 40
//! printf "gift,taxrate\n100,40\n" | gift-aid batch
//! gift-aid live --rate 20
//! ```

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod amount;
mod calculator;
mod engine;
mod live;
mod panel;
mod prelude;
mod raw;
mod tax_rate;

use calculator::calculate_gift_aid;
use panel::Panel;
use prelude::*;

/// Calculates UK Gift Aid reclaims for charitable gifts
#[derive(Parser)]
#[command(name = "gift-aid")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a single gift and print the calculator panel
    Calc {
        /// Gross gift in pounds, e.g. 12.50
        #[arg(allow_negative_numbers = true)]
        gift: String,
        /// Giver's tax band as a percentage, basic rate if left out
        #[arg(short, long, allow_negative_numbers = true)]
        rate: Option<String>,
    },

    /// Recalculate the panel for every "GIFT [RATE]" line read from stdin.
    /// The last word of a line is the rate, so a gift written with spaces,
    /// e.g. "1 000", needs a rate after it.
    Live {
        /// Tax band to start from
        #[arg(short, long, allow_negative_numbers = true)]
        rate: Option<String>,
    },

    /// Read a CSV of gifts (gift,taxrate) and write a CSV of results
    Batch {
        /// CSV file to read, stdin if left out
        file: Option<PathBuf>,
    },
}

/// Logs go to stderr so that stdout only carries the calculator output.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gift_aid=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calc { gift, rate } => {
            let gift = calculate_gift_aid(
                &RawValue::Text(gift),
                &RawValue::Text(rate.unwrap_or_default()),
            );
            print!("{}", Panel::render(gift));
        }
        Commands::Live { rate } => {
            live::run(io::stdin().lock(), io::stdout().lock(), rate)?;
        }
        Commands::Batch { file } => {
            let handle: Box<dyn Read> = match file {
                Some(path) => Box::new(BufReader::new(
                    File::open(&path).with_context(|| {
                        format!("cannot open input file {}", path.display())
                    })?,
                )),
                None => Box::new(io::stdin().lock()),
            };

            let gifts = engine::read_gifts(handle)?;
            engine::write_gifts(io::stdout().lock(), &gifts)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Commands> {
        Ok(Cli::try_parse_from(args.iter().copied())?.command)
    }

    #[test]
    fn it_parses_negative_rate() -> Result<()> {
        let Commands::Calc { gift, rate } =
            parse(&["gift-aid", "calc", "100", "--rate", "-5"])?
        else {
            panic!("expected calc command");
        };

        assert_eq!(gift, "100");
        assert_eq!(rate.as_deref(), Some("-5"));

        Ok(())
    }

    #[test]
    fn it_parses_negative_gift() -> Result<()> {
        let Commands::Calc { gift, rate } =
            parse(&["gift-aid", "calc", "-10", "-r", "-0.4"])?
        else {
            panic!("expected calc command");
        };

        assert_eq!(gift, "-10");
        assert_eq!(rate.as_deref(), Some("-0.4"));

        Ok(())
    }

    #[test]
    fn it_parses_negative_live_rate() -> Result<()> {
        let Commands::Live { rate } =
            parse(&["gift-aid", "live", "--rate", "-5"])?
        else {
            panic!("expected live command");
        };

        assert_eq!(rate.as_deref(), Some("-5"));

        Ok(())
    }

    #[test]
    fn it_parses_batch_file() -> Result<()> {
        let Commands::Batch { file } =
            parse(&["gift-aid", "batch", "gifts.csv"])?
        else {
            panic!("expected batch command");
        };

        assert_eq!(file, Some(PathBuf::from("gifts.csv")));

        Ok(())
    }

    #[test]
    fn it_rejects_unknown_flags() {
        assert!(parse(&["gift-aid", "calc", "100", "--fast"]).is_err());
    }
}
