use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use dict_cc::lookup;

const ISSUE_TRACKER: &str = "https://github.com/dict-cc/dict-cc-rust/issues";

#[derive(Parser, Debug)]
#[command(name = "dict-cc", version, about = "Look up any word in many languages!")]
struct Cli {
    /// Language pair to search in, given as the two concatenated
    /// abbreviations (e.g. "ende" for English-German)
    #[arg(short = 'p', long = "pair", default_value = "ende")]
    pair: String,

    /// Enable verbose logging
    #[arg(long = "verbose")]
    verbose: bool,

    /// Word or phrase to look up
    term: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Re-fetch the list of supported language pairs
    UpdateLangs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err:#}");
        eprintln!("If you believe that is a bug, please open a ticket at {ISSUE_TRACKER}.");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    dict_cc::logging::init(cli.verbose)?;
    let mut out = io::stdout();
    match cli.command {
        Some(Command::UpdateLangs) => {
            dict_cc::update_languages(&mut out)?;
            Ok(())
        }
        None => run_lookup(cli, &mut out),
    }
}

fn run_lookup<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let pairs = dict_cc::load_or_update_languages(out)?;

    let Some(term) = cli.term.as_deref() else {
        writeln!(out, "Nothing to look up.")?;
        return Ok(());
    };
    let Some(pair) = dict_cc::find_pair(&pairs, &cli.pair) else {
        bail!(
            "unknown language pair '{}'; run update-langs to refresh the list",
            cli.pair
        );
    };

    // Result-page parsing is not implemented yet; hand the user the URL.
    writeln!(out, "{}", lookup::lookup_url(pair, term))?;
    Ok(())
}
