use anyhow::Context;
use clap::Parser;
use reversi_engine::{GameState, Player};
use reversi_player::config::PlayConfig;
use reversi_player::connectors::{ComputerConnector, ConsoleConnector, Connector};
use reversi_player::heuristic::PositionalHeuristic;
use reversi_player::{driver, logging};
use std::io;

fn seat(player: Player, config: &PlayConfig) -> Box<dyn Connector> {
    if config.human.player() == Some(player) {
        Box::new(ConsoleConnector::stdio(player, config.hints))
    } else {
        Box::new(ComputerConnector::new(player, PositionalHeuristic))
    }
}

fn main() -> anyhow::Result<()> {
    let config = PlayConfig::parse();
    logging::init(&config.log_filter);
    tracing::debug!(?config, "starting");

    let mut black = seat(Player::Black, &config);
    let mut white = seat(Player::White, &config);
    let mut game = GameState::new();
    let stdout = io::stdout();

    match driver::play_session(&mut game, black.as_mut(), white.as_mut(), &mut stdout.lock()) {
        Ok(_) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
            println!("\nGoodbye.");
            Ok(())
        }
        Err(error) => Err(error).context("game stopped"),
    }
}
