//! Implements game-level Reversi logic.
//!
//! For correctness, this higher-level interface is preferred, but for
//! move generation you may use [`crate::rules`] directly on a [`Board`].

use crate::board::{Board, Scores};
use crate::error::GameError;
use crate::location::{Location, LocationList, MoveList};
use crate::rules;
use std::fmt;
use tracing::{debug, info, trace};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsePlayerError;

impl fmt::Display for ParsePlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid player string")
    }
}

impl std::error::Error for ParsePlayerError {}

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Player::Black),
            "white" | "w" | "o" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// An action in a Reversi game: pass or place a disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Place(Location),
    Pass,
}

impl From<Location> for Action {
    fn from(loc: Location) -> Self {
        Self::Place(loc)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(loc) => write!(f, "{}", loc),
            Action::Pass => f.write_str("pass"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseActionError;

impl fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a location like \"D3\" or \"pass\"")
    }
}

impl std::error::Error for ParseActionError {}

/// Parse "pass" (any case) or a location in "D3" notation.
impl std::str::FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Action::Pass);
        }
        s.parse().map(Action::Place).or(Err(ParseActionError))
    }
}

/// Whether the game can still be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Terminal,
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Tie,
}

impl Outcome {
    /// Decide the game from the final disc counts: the majority wins.
    pub fn from_scores(scores: Scores) -> Self {
        use std::cmp::Ordering;

        match scores.black.cmp(&scores.white) {
            Ordering::Greater => Outcome::Win(Player::Black),
            Ordering::Less => Outcome::Win(Player::White),
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Tie => f.write_str("Tie"),
        }
    }
}

/// What an accepted placement changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub placed: Location,
    /// Discs turned to the mover's color, grouped by direction.
    pub flipped: LocationList,
    /// The player whose turn was skipped because they had no legal move, if any.
    pub forced_pass: Option<Player>,
    /// The game state after the move and every automatic pass.
    pub state: GameState,
}

/// What an accepted pass changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassOutcome {
    pub forced_pass: Option<Player>,
    pub state: GameState,
}

/// The result of an accepted [`Action`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Moved(MoveOutcome),
    Passed(PassOutcome),
}

impl Turn {
    pub fn forced_pass(&self) -> Option<Player> {
        match self {
            Turn::Moved(outcome) => outcome.forced_pass,
            Turn::Passed(outcome) => outcome.forced_pass,
        }
    }

    pub fn state(&self) -> &GameState {
        match self {
            Turn::Moved(outcome) => &outcome.state,
            Turn::Passed(outcome) => &outcome.state,
        }
    }
}

/// The complete state of a Reversi game.
///
/// Every request either succeeds and applies all of its effects (placement,
/// flips, turn change, automatic passes and the end-of-game check) or fails
/// and leaves the state exactly as it was. Once the game is terminal only
/// [`GameState::reset`] changes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    board: Board,
    current_player: Player,
    /// Saturates rather than wrapping under a long run of voluntary passes.
    consecutive_passes: u8,
    terminal: bool,
}

impl Default for GameState {
    /// Gets the starting position with black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            consecutive_passes: 0,
            terminal: false,
        }
    }

    /// Start from an arbitrary position with `player` to move.
    /// The position is taken as-is: turn status is evaluated after the first move or pass.
    pub const fn from_position(board: Board, player: Player) -> Self {
        Self {
            board,
            current_player: player,
            consecutive_passes: 0,
            terminal: false,
        }
    }

    /// Reinitialize the whole game to the starting position.
    pub fn reset(&mut self) -> &GameState {
        debug!("game reset");
        *self = Self::new();
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Turns passed in a row since the last placement, automatic or not.
    #[inline]
    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn status(&self) -> Status {
        if self.terminal {
            Status::Terminal
        } else {
            Status::InProgress
        }
    }

    pub fn scores(&self) -> Scores {
        self.board.scores()
    }

    /// The final result, or None while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.terminal {
            Some(Outcome::from_scores(self.scores()))
        } else {
            None
        }
    }

    /// The winner of a finished game. None during play and on a tie.
    pub fn winner(&self) -> Option<Player> {
        match self.outcome()? {
            Outcome::Win(player) => Some(player),
            Outcome::Tie => None,
        }
    }

    /// Get the legal moves for the active player in row-major order.
    /// Recomputed from the board on every call.
    pub fn legal_moves(&self) -> MoveList {
        rules::legal_moves(&self.board, self.current_player)
    }

    /// Place a disc for the active player at `(row, col)`.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;
        let loc = Location::from_coords(row, col).ok_or_else(|| {
            trace!(row, col, "rejected off-board move");
            GameError::OutOfBounds { row, col }
        })?;
        self.play(loc)
    }

    /// Place a disc for the active player at `loc`.
    pub fn play(&mut self, loc: Location) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;

        let player = self.current_player;
        if !rules::is_legal(&self.board, player, loc) {
            trace!(%player, %loc, "rejected illegal move");
            let (row, col) = loc.to_coords();
            return Err(GameError::IllegalMove { row, col });
        }

        let flipped = rules::apply_move(&mut self.board, player, loc);
        debug!(%player, %loc, flipped = flipped.len(), "move accepted");

        self.current_player = !player;
        self.consecutive_passes = 0;
        let forced_pass = self.end_turn();

        Ok(MoveOutcome {
            placed: loc,
            flipped,
            forced_pass,
            state: *self,
        })
    }

    /// Pass the active player's turn. Passing is not checked against the
    /// legal moves; callers are expected to offer it only when none exist.
    pub fn submit_pass(&mut self) -> Result<PassOutcome, GameError> {
        self.ensure_in_progress()?;

        debug!(player = %self.current_player, "pass accepted");
        self.current_player = !self.current_player;
        self.consecutive_passes = self.consecutive_passes.saturating_add(1);
        let forced_pass = self.end_turn();

        Ok(PassOutcome {
            forced_pass,
            state: *self,
        })
    }

    /// Make an action as the active player.
    pub fn apply(&mut self, action: Action) -> Result<Turn, GameError> {
        match action {
            Action::Place(loc) => self.play(loc).map(Turn::Moved),
            Action::Pass => self.submit_pass().map(Turn::Passed),
        }
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.terminal {
            trace!("rejected request after game end");
            return Err(GameError::GameAlreadyOver);
        }
        Ok(())
    }

    /// Skip players with no legal move until someone can play or two turns in
    /// a row have been passed, which ends the game.
    /// Returns the player skipped along the way, if any.
    fn end_turn(&mut self) -> Option<Player> {
        let mut forced_pass = None;

        while self.legal_moves().is_empty() {
            self.consecutive_passes = self.consecutive_passes.saturating_add(1);
            if self.consecutive_passes >= 2 {
                self.terminal = true;
                let scores = self.scores();
                info!(
                    black = scores.black,
                    white = scores.white,
                    outcome = %Outcome::from_scores(scores),
                    "game over"
                );
                break;
            }

            debug!(player = %self.current_player, "no legal moves, turn skipped");
            forced_pass = Some(self.current_player);
            self.current_player = !self.current_player;
        }

        forced_pass
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scores = self.scores();
        writeln!(f, "{}", self.board)?;
        write!(f, "Black {} - White {}", scores.black, scores.white)?;
        match self.outcome() {
            Some(outcome) => write!(f, " (game over: {})", outcome),
            None => write!(f, " ({} to move)", self.current_player),
        }
    }
}
