//! Line-oriented game loop.
//!
//! Reads one command per line, plays it against the match, and writes the
//! match's own narration back out verbatim.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    terminal::{Clear, ClearType},
};
use hand_cricket::{Choice, HandCricket, MatchError, OpponentKind, entities::Role};
use log::debug;
use std::io::{BufRead, Write};

use crate::commands::{Command, parse_command};

pub const HELP: &str = "\
Each turn the batsman and the bowler both pick a number from 0 to 6.
Same number: the batsman is OUT. Otherwise the batsman scores their number.

COMMANDS:
  B, then W         Two players: the batsman enters a number, then the bowler
  B W | play B W    Play a whole turn on one line
  B   | bat B       Against the computer: just the batsman's number
  status            Show the scoreboard
  reset             Start a new match with the same players
  help              Show this message
  quit              Leave the game
";

/// How the session talks to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Wipe the batsman's entry off the screen before the bowler picks.
    /// Only makes sense when input is echoed on the same terminal.
    pub conceal_batsman: bool,
}

/// Drive `game` from `input` until the player quits or input runs out.
///
/// Against another person, each turn takes two lines: the batsman's number,
/// then the bowler's. The turn is only played once both are in.
///
/// # Errors
///
/// Only I/O failures are errors; bad input and rejected turns are reported
/// to the player and the loop carries on.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut HandCricket,
    mut input: R,
    mut output: W,
    options: SessionOptions,
) -> Result<()> {
    writeln!(output, "{}", game.status_message())?;
    write_scoreboard(game, &mut output)?;

    // Batsman's number waiting for the bowler's
    let mut pending: Option<Choice> = None;
    let mut line = String::new();
    loop {
        write_prompt(game, pending, &mut output)?;
        line.clear();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            debug!("input closed");
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Play { batsman, bowler } => {
                pending = None;
                let result = game.play_turn(batsman, bowler);
                write_turn(game, result.map(|_| ()), &mut output)?;
            }
            Command::Bat(batsman) if game.settings().opponent == OpponentKind::Computer => {
                let result = game.bat(batsman);
                write_turn(game, result.map(|_| ()), &mut output)?;
            }
            Command::Bat(bowler) => match pending {
                Some(batsman) => {
                    let result = game.play_turn(batsman.into(), bowler);
                    // A bad bowling number keeps the batsman's pick.
                    if !matches!(
                        result,
                        Err(MatchError::InvalidChoice {
                            role: Role::Bowler,
                            ..
                        })
                    ) {
                        pending = None;
                    }
                    write_turn(game, result.map(|_| ()), &mut output)?;
                }
                None => match game.check_choice(Role::Batsman, bowler) {
                    Ok(choice) => {
                        pending = Some(choice);
                        if options.conceal_batsman {
                            conceal_entry(&mut output)?;
                        }
                        writeln!(output, "Waiting for bowler's selection...")?;
                    }
                    Err(e) => write_turn(game, Err(e), &mut output)?,
                },
            },
            Command::Reset => {
                pending = None;
                game.reset();
                writeln!(output, "{}", game.status_message())?;
                write_scoreboard(game, &mut output)?;
            }
            Command::Status => write_scoreboard(game, &mut output)?,
            Command::Help => write!(output, "{HELP}")?,
            Command::Quit => break,
        }
    }

    // Anything the player hasn't seen yet is only useful in the debug log.
    for event in game.drain_events() {
        debug!("unshown event: {event:?}");
    }
    writeln!(output, "Thanks for playing!")?;
    output.flush()?;
    Ok(())
}

fn write_prompt<W: Write>(
    game: &HandCricket,
    pending: Option<Choice>,
    output: &mut W,
) -> Result<()> {
    if game.is_over() {
        write!(output, "Match over. Type 'reset' to play again or 'quit'.\n> ")?;
    } else if game.settings().opponent == OpponentKind::Computer {
        write!(output, "{}, pick a number (0-6): ", game.batsman().name())?;
    } else if pending.is_some() {
        write!(
            output,
            "{} (bowler) - select your number (0-6): ",
            game.bowler().name()
        )?;
    } else {
        write!(
            output,
            "{} (batsman) - select your number (0-6): ",
            game.batsman().name()
        )?;
    }
    output.flush()?;
    Ok(())
}

/// Erase the prompt line the batsman just typed on.
fn conceal_entry<W: Write>(output: &mut W) -> Result<()> {
    queue!(
        output,
        MoveUp(1),
        MoveToColumn(0),
        Clear(ClearType::CurrentLine)
    )?;
    Ok(())
}

fn write_turn<W: Write>(
    game: &HandCricket,
    result: Result<(), MatchError>,
    output: &mut W,
) -> Result<()> {
    match result {
        Ok(()) => {
            if let Some(delivery) = game.last_delivery() {
                writeln!(output, "[{delivery}]")?;
            }
            writeln!(output, "{}", game.status_message())?;
            write_scoreboard(game, output)?;
            if game.is_over() {
                write_summary(game, output)?;
            }
        }
        // Rejected input has already been narrated.
        Err(e) if e.is_validation() => writeln!(output, "{}", game.status_message())?,
        Err(e) => writeln!(output, "Can't play that turn: {e}.")?,
    }
    Ok(())
}

fn write_scoreboard<W: Write>(game: &HandCricket, output: &mut W) -> Result<()> {
    writeln!(output, "{}", game.view())?;
    Ok(())
}

fn write_summary<W: Write>(game: &HandCricket, output: &mut W) -> Result<()> {
    writeln!(output, "==== MATCH SUMMARY ====")?;
    for player in game.players() {
        writeln!(output, "{player}")?;
    }
    if let Some(result) = game.result() {
        writeln!(output, "{result}")?;
    }
    Ok(())
}
