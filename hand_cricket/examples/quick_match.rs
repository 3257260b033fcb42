//! Quick Match Example
//!
//! Plays a seeded single-innings match against the computer, then a scripted
//! two-player match, printing the narration after every turn.

use hand_cricket::{HandCricket, MatchSettings, constants::COMPUTER_NAME};

fn main() -> Result<(), hand_cricket::MatchError> {
    println!("=== Hand Cricket vs the Computer ===\n");

    let settings = MatchSettings::vs_computer().with_seed(2024);
    let mut game = HandCricket::with_settings(settings, "Asha", COMPUTER_NAME)?;
    println!("{}", game.status_message());

    let mut pick = 0;
    while !game.is_over() {
        pick = pick % 6 + 1;
        let report = game.bat(pick)?;
        println!("[{}] {}", report.delivery, game.status_message());
    }
    println!("{}\n", game.view());

    println!("=== Two-player match ===\n");

    let mut game = HandCricket::two_player("Asha", "Ben")?;
    println!("{}", game.status_message());
    for (batsman, bowler) in [(3, 5), (4, 4), (6, 1), (2, 2)] {
        game.play_turn(batsman, bowler)?;
        println!("[{batsman} vs {bowler}] {}", game.status_message());
    }
    println!("{}", game.view());

    Ok(())
}
