//! Runs games between two connectors, narrating them to a writer.

use crate::connectors::Connector;
use reversi_engine::{GameState, Outcome, Player, Turn};
use std::io::{self, Write};
use tracing::{info, warn};

/// Play `game` to the end, asking `black` and `white` for actions in turn.
///
/// Refused actions go back to the connector that made them. Any I/O error
/// from a connector or `out` stops the game where it stands.
pub fn play_game(
    game: &mut GameState,
    black: &mut dyn Connector,
    white: &mut dyn Connector,
    out: &mut dyn Write,
) -> io::Result<Outcome> {
    debug_assert_eq!(black.player_color(), Player::Black);
    debug_assert_eq!(white.player_color(), Player::White);

    writeln!(out, "{}\n", game)?;

    loop {
        if let Some(outcome) = game.outcome() {
            let scores = game.scores();
            info!(%outcome, black = scores.black, white = scores.white, "game finished");
            match outcome {
                Outcome::Win(winner) => writeln!(
                    out,
                    "Game over! {} wins with {} discs to {}.",
                    winner,
                    scores.of(winner),
                    scores.of(!winner)
                )?,
                Outcome::Tie => writeln!(out, "Game over! It's a tie with {} discs each.", scores.black)?,
            }
            return Ok(outcome);
        }

        let player = game.current_player();
        let seat: &mut dyn Connector = match player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };

        let action = seat.choose_action(game)?;
        let turn = match game.apply(action) {
            Ok(turn) => turn,
            Err(error) => {
                warn!(%player, %action, %error, "action refused");
                seat.rejected(action, error)?;
                continue;
            }
        };

        narrate(out, player, &turn)?;
        black.observe(&turn)?;
        white.observe(&turn)?;
    }
}

/// Play games until neither seat asks for another, resetting `game`
/// between them. Returns the outcome of every finished game.
pub fn play_session(
    game: &mut GameState,
    black: &mut dyn Connector,
    white: &mut dyn Connector,
    out: &mut dyn Write,
) -> io::Result<Vec<Outcome>> {
    let mut outcomes = Vec::new();
    loop {
        outcomes.push(play_game(game, black, white, out)?);
        if !(black.play_again()? || white.play_again()?) {
            return Ok(outcomes);
        }

        game.reset();
        info!(games = outcomes.len(), "starting a new game");
        writeln!(out, "\nNew game.")?;
    }
}

fn narrate(out: &mut dyn Write, player: Player, turn: &Turn) -> io::Result<()> {
    match turn {
        Turn::Moved(outcome) => writeln!(
            out,
            "{} plays {}, flipping {}.",
            player,
            outcome.placed,
            outcome.flipped.len()
        )?,
        Turn::Passed(_) => writeln!(out, "{} passes.", player)?,
    }
    if let Some(skipped) = turn.forced_pass() {
        writeln!(out, "{} has no valid moves and must pass.", skipped)?;
    }
    writeln!(out, "{}\n", turn.state())
}
