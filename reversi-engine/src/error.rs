//! Errors returned by requests to the game engine.

use derive_more::{Display, Error};

/// Why the engine refused a request. The game state is untouched whenever
/// one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The coordinates do not name a cell on the board.
    #[display(fmt = "({}, {}) is outside the board", row, col)]
    OutOfBounds { row: usize, col: usize },

    /// The cell is occupied, or placing there would capture nothing.
    #[display(fmt = "({}, {}) is not a legal move", row, col)]
    IllegalMove { row: usize, col: usize },

    /// The game has ended; only a reset is accepted.
    #[display(fmt = "the game is already over")]
    GameAlreadyOver,
}
