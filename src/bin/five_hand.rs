//! Five Hand CLI: deal hands and print them in winning order.
use anyhow::{Context, Result};
use clap::Parser;
use five_hand::game::{DeckSource, FiveHand, DEFAULT_HANDS, MAX_HANDS};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// File of comma-separated card codes; a shuffled deck is used when absent.
    file: Option<PathBuf>,
    /// Seed for the shuffle, for reproducible deals.
    #[clap(long, short, conflicts_with = "file")]
    seed: Option<u64>,
    /// Number of hands to deal.
    #[clap(long, default_value_t = DEFAULT_HANDS as u8,
           value_parser = clap::value_parser!(u8).range(2..=MAX_HANDS as i64))]
    hands: u8,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let source = match cli.file {
        Some(path) => DeckSource::File(path),
        None => DeckSource::Random { seed: cli.seed },
    };

    let mut game = FiveHand::new(source, cli.hands as usize).context("cannot build deck")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let res = game.play(&mut out);
    out.flush()?;
    res?;
    Ok(())
}
