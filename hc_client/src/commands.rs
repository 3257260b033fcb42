use std::fmt;

/// A line of player input, parsed.
///
/// Numbers are passed through as typed; range checking is the match's job
/// so that out-of-range picks get the game's own narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Both numbers for one turn: batsman first, then bowler.
    Play { batsman: i32, bowler: i32 },
    /// A single number. Against the computer it is the batsman's; in a
    /// two-player match it is whichever side is being asked.
    Bat(i32),
    Reset,
    Status,
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Something that should have been a number wasn't.
    InvalidNumber(String),
    /// More than two numbers on one line.
    TooManyNumbers,
    /// `play` or `bat` with nothing after it.
    MissingNumber,
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber(value) => write!(
                f,
                "'{value}' isn't a number. Pick a number between 0 and 6 (e.g., '4')"
            ),
            Self::TooManyNumbers => write!(
                f,
                "Too many numbers. Enter the batsman's number, then the bowler's (e.g., '3 5')"
            ),
            Self::MissingNumber => write!(f, "Missing number (e.g., 'bat 4' or 'play 3 5')"),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{cmd}'. Type 'help' to see available commands"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a line of input into a [`Command`].
///
/// # Examples
///
/// ```
/// use hc_client::commands::{Command, parse_command};
///
/// assert_eq!(parse_command("quit"), Ok(Command::Quit));
/// assert_eq!(parse_command("4"), Ok(Command::Bat(4)));
/// assert_eq!(
///     parse_command("play 3 5"),
///     Ok(Command::Play { batsman: 3, bowler: 5 })
/// );
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();

    // Try single-word commands first
    match trimmed.to_ascii_lowercase().as_str() {
        "reset" | "new" => return Ok(Command::Reset),
        "status" | "score" => return Ok(Command::Status),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();
    match parts.first() {
        Some(&"play") | Some(&"bat") if parts.len() == 1 => Err(ParseError::MissingNumber),
        Some(&"play") | Some(&"bat") => parse_numbers(&parts[1..]),
        Some(first) if looks_numeric(first) => parse_numbers(&parts),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

fn looks_numeric(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+')
}

/// Parse one number. Integers too large for `i32` saturate so the match
/// rejects them like any other out-of-range pick.
fn parse_number(s: &str) -> Result<i32, ParseError> {
    if let Ok(value) = s.parse::<i32>() {
        return Ok(value);
    }
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber(s.to_string()));
    }
    Ok(if s.starts_with('-') { i32::MIN } else { i32::MAX })
}

/// Parse "B" or "B W"
fn parse_numbers(parts: &[&str]) -> Result<Command, ParseError> {
    match parts {
        [batsman] => Ok(Command::Bat(parse_number(batsman)?)),
        [batsman, bowler] => Ok(Command::Play {
            batsman: parse_number(batsman)?,
            bowler: parse_number(bowler)?,
        }),
        [] => Err(ParseError::MissingNumber),
        _ => Err(ParseError::TooManyNumbers),
    }
}
