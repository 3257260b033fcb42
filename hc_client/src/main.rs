//! A terminal client for hand cricket.
//!
//! Plays a match on the local terminal, either between two people sharing
//! the keyboard or one person against the computer.

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use env_logger::Env;
use hand_cricket::{
    HandCricket, MatchSettings,
    constants::COMPUTER_NAME,
    entities::{PlayerName, Seat},
};
use log::info;
use pico_args::Arguments;
use std::io;

use hc_client::app::{SessionOptions, run_session};

const HELP: &str = "\
Play hand cricket in the terminal

USAGE:
  hc_client [OPTIONS]

OPTIONS:
  --name NAME           First batsman's name  [default: Player 1]
  --name2 NAME          Second player's name  [default: Player 2]
  --seed N              Seed for the computer's choices

FLAGS:
  --computer            Bat a single innings against the computer
  -h, --help            Print help information

ENVIRONMENT:
  RUST_LOG              Log filter  [default: warn]
";

struct Args {
    computer: bool,
    name: String,
    name2: String,
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        computer: pargs.contains("--computer"),
        name: pargs
            .opt_value_from_str("--name")
            .context("Invalid --name")?
            .unwrap_or_default(),
        name2: pargs
            .opt_value_from_str("--name2")
            .context("Invalid --name2")?
            .unwrap_or_default(),
        seed: pargs
            .opt_value_from_str("--seed")
            .context("--seed must be a non-negative integer")?,
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    run(args)
}

fn run(args: Args) -> Result<()> {
    // Blank names fall back to the seat defaults.
    let name = PlayerName::or_default_for(&args.name, Seat::One);
    let mut game = if args.computer {
        let mut settings = MatchSettings::vs_computer();
        if let Some(seed) = args.seed {
            settings = settings.with_seed(seed);
        }
        info!("starting a match against the computer");
        HandCricket::with_settings(settings, name.as_str(), COMPUTER_NAME)?
    } else {
        let name2 = PlayerName::or_default_for(&args.name2, Seat::Two);
        info!("starting a two-player match");
        HandCricket::two_player(name.as_str(), name2.as_str())?
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    // Piped input isn't echoed, so there is nothing to hide.
    let options = SessionOptions {
        conceal_batsman: stdin.is_tty() && stdout.is_tty(),
    };
    run_session(&mut game, stdin.lock(), stdout.lock(), options)
}
