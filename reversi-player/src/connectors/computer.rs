use super::Connector;
use crate::Strategy;
use reversi_engine::{Action, GameError, GameState, Player};
use std::io;
use tracing::debug;

/// A seat played by a [`Strategy`]. Passes only when it has no legal move.
pub struct ComputerConnector<S> {
    player: Player,
    strategy: S,
}

impl<S: Strategy> ComputerConnector<S> {
    pub fn new(player: Player, strategy: S) -> Self {
        Self { player, strategy }
    }
}

impl<S: Strategy> Connector for ComputerConnector<S> {
    fn player_color(&self) -> Player {
        self.player
    }

    fn choose_action(&mut self, state: &GameState) -> io::Result<Action> {
        let action = match self.strategy.choose_move(state) {
            Some(loc) => Action::Place(loc),
            None => Action::Pass,
        };
        debug!(player = %self.player, %action, "computer chose");
        Ok(action)
    }

    fn rejected(&mut self, action: Action, error: GameError) -> io::Result<()> {
        // The strategy only picks from the legal moves, so this is a bug, and
        // asking again would pick the same move forever.
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("computer action {} was refused: {}", action, error),
        ))
    }
}
