//! Integration tests for the hc_client game loop.
//!
//! Feeds scripted input through the session and checks what the player sees.

use hand_cricket::{
    Choice, HandCricket, MatchSettings,
    bot::{RandomBowler, ScriptedChooser},
    constants::{COMPUTER_NAME, INVALID_CHOICE_MESSAGE},
};
use hc_client::app::{SessionOptions, run_session};
use std::io::Cursor;

/// Run a session with the given options and return everything written
fn play_with(game: &mut HandCricket, lines: &[&str], options: SessionOptions) -> String {
    let input = Cursor::new(lines.join("\n"));
    let mut output = Vec::new();
    run_session(game, input, &mut output, options).unwrap();
    String::from_utf8(output).unwrap()
}

/// Run a session over the given input lines and return everything written
fn play(game: &mut HandCricket, lines: &[&str]) -> String {
    play_with(game, lines, SessionOptions::default())
}

// ============================================================================
// Two-player sessions
// ============================================================================

#[test]
fn test_full_two_player_session() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &["3 5", "4 4", "2 2", "quit"]);

    assert!(out.contains("Welcome to Hand Cricket! A is batting first."));
    assert!(out.contains("A scored 3 runs. Total: 3"));
    assert!(out.contains("A is OUT! A scored 3 runs. Target: 4 runs. B is now batting."));
    assert!(out.contains("A WINS! Final Score: 3 vs 0"));
    assert!(out.contains("==== MATCH SUMMARY ===="));
    assert!(out.contains("A - Score: 3"));
    assert!(out.ends_with("Thanks for playing!\n"));
    assert!(game.is_over());
}

#[test]
fn test_out_of_range_input_is_narrated() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &["7 2", "-1 3", "99999999999 1", "quit"]);

    assert_eq!(out.matches(INVALID_CHOICE_MESSAGE).count(), 3);
    assert!(!out.contains("isn't a number"));
    assert_eq!(game.batsman().score(), 0);
}

#[test]
fn test_bad_commands_keep_session_alive() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &["bowl", "3 five", "2 1", "quit"]);

    assert!(out.contains("Unrecognized command 'bowl'"));
    assert!(out.contains("'five' isn't a number"));
    assert_eq!(game.batsman().score(), 2);
}

#[test]
fn test_turn_after_match_over_is_refused() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &["1 1", "1 1", "3 4"]);

    assert!(out.contains("Can't play that turn: match is already over."));
    assert!(out.contains("Type 'reset' to play again"));
}

#[test]
fn test_reset_and_status_commands() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &["6 1", "reset", "status", "help"]);

    assert!(out.contains("New game started! A is batting first."));
    assert!(out.contains("A: 0 | B: 0"));
    assert!(out.contains("COMMANDS:"));
    assert_eq!(game.batsman().score(), 0);
}

#[test]
fn test_session_ends_at_end_of_input() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &[]);
    assert!(out.contains("Thanks for playing!"));
}

// ============================================================================
// Computer sessions
// ============================================================================

#[test]
fn test_computer_session_with_scripted_bowler() {
    let script = [1, 5].map(|v| Choice::new(v).unwrap());
    let mut game = HandCricket::with_bowler(
        MatchSettings::vs_computer(),
        "Asha",
        COMPUTER_NAME,
        Box::new(RandomBowler::new(ScriptedChooser::new(script))),
    )
    .unwrap();

    let out = play(&mut game, &["4", "5", "quit"]);

    assert!(out.contains("Asha, pick a number (0-6):"));
    assert!(out.contains("Asha scored 4 runs. Total: 4"));
    assert!(out.contains("[5 vs 5]"));
    assert!(out.contains("Asha is OUT! Final Score: 4"));
}

#[test]
fn test_single_number_waits_for_bowler() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &["4", "quit"]);

    assert!(out.contains("A (batsman) - select your number (0-6):"));
    assert!(out.contains("Waiting for bowler's selection..."));
    assert!(out.contains("B (bowler) - select your number (0-6):"));
    assert_eq!(game.batsman().score(), 0);
    assert_eq!(game.last_delivery(), None);
}

// ============================================================================
// Two-step turns
// ============================================================================

#[test]
fn test_two_line_turns_play_full_match() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &["3", "5", "4", "4", "2", "2", "quit"]);

    assert_eq!(out.matches("Waiting for bowler's selection...").count(), 3);
    assert!(out.contains("[3 vs 5]"));
    assert!(out.contains("A scored 3 runs. Total: 3"));
    assert!(out.contains("A is OUT! A scored 3 runs. Target: 4 runs. B is now batting."));
    assert!(out.contains("B (batsman) - select your number (0-6):"));
    assert!(out.contains("A WINS! Final Score: 3 vs 0"));
    assert!(game.is_over());
}

#[test]
fn test_bad_batting_number_is_rejected_immediately() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &["9", "2", "1", "quit"]);

    assert!(out.contains(INVALID_CHOICE_MESSAGE));
    assert_eq!(out.matches("Waiting for bowler's selection...").count(), 1);
    assert_eq!(game.batsman().score(), 2);
}

#[test]
fn test_bad_bowling_number_keeps_batsman_pick() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &["3", "9", "5", "quit"]);

    assert!(out.contains(INVALID_CHOICE_MESSAGE));
    assert!(out.contains("A scored 3 runs. Total: 3"));
    assert_eq!(game.batsman().score(), 3);
}

#[test]
fn test_reset_discards_pending_pick() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    play(&mut game, &["3", "reset", "4", "1", "quit"]);

    assert_eq!(game.batsman().score(), 4);
}

#[test]
fn test_concealed_entry_is_erased() {
    let mut game = HandCricket::two_player("A", "B").unwrap();
    let options = SessionOptions {
        conceal_batsman: true,
    };
    let out = play_with(&mut game, &["3", "5", "quit"], options);
    // Cursor up, then clear the line
    assert!(out.contains("\x1b[1A"));
    assert!(out.contains("\x1b[2K"));
    assert!(out.contains("A scored 3 runs. Total: 3"));

    let mut game = HandCricket::two_player("A", "B").unwrap();
    let out = play(&mut game, &["3", "5", "quit"]);
    assert!(!out.contains("\x1b[2K"));
}
