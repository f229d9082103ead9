use reversi_engine::{Action, GameError, GameState, Player, Turn};
use std::io;

/// A player-facing abstract interface to a seat at the table.
pub trait Connector {
    /// Find out what color we're playing.
    fn player_color(&self) -> Player;

    /// Pick an action for the position. Only called on our turn.
    fn choose_action(&mut self, state: &GameState) -> io::Result<Action>;

    /// Handle the engine refusing our last action. Returning an error gives up the game.
    fn rejected(&mut self, action: Action, error: GameError) -> io::Result<()>;

    /// Observe an accepted turn by either player.
    fn observe(&mut self, _turn: &Turn) -> io::Result<()> {
        Ok(())
    }

    /// Asked once a game has finished. Returning true starts a new game from
    /// the starting position.
    fn play_again(&mut self) -> io::Result<bool> {
        Ok(false)
    }
}
