//! The board itself: an 8x8 grid of cells with no knowledge of the rules.
//!
//! Rows run top to bottom and columns left to right, both from 0. All rule
//! logic lives in [`crate::rules`] and [`crate::GameState`]; a [`Board`] will
//! happily hold positions no game could reach, which is what tests want.

use crate::error::GameError;
use crate::game::Player;
use crate::location::{Location, LocationList};
use crate::utils::format_grid;
use crate::EDGE_LENGTH;
use std::fmt;

/// The contents of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Player> for Cell {
    /// The disc color a player places.
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

/// Disc counts for both colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scores {
    pub black: u8,
    pub white: u8,
}

impl Scores {
    /// The disc count of one player.
    pub fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

/// An 8x8 grid of [`Cell`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the standard starting layout.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard four-disc starting layout.
    pub const fn new() -> Self {
        const C: usize = EDGE_LENGTH / 2;
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[C - 1][C - 1] = Cell::White;
        cells[C - 1][C] = Cell::Black;
        cells[C][C - 1] = Cell::Black;
        cells[C][C] = Cell::White;
        Self { cells }
    }

    /// A board with no discs at all.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Reinitialize to the standard starting layout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read a cell by coordinates.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        let loc = Location::from_coords(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        Ok(self.at(loc))
    }

    /// Overwrite a cell by coordinates. No legality checking is done.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        let loc = Location::from_coords(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        self.put(loc, cell);
        Ok(())
    }

    #[inline]
    pub fn at(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    #[inline]
    pub fn put(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Count the cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Count the discs of both colors.
    pub fn scores(&self) -> Scores {
        self.cells
            .iter()
            .flatten()
            .fold(Scores::default(), |mut scores, cell| {
                match cell {
                    Cell::Black => scores.black += 1,
                    Cell::White => scores.white += 1,
                    Cell::Empty => {}
                }
                scores
            })
    }

    /// Display the board with `moves` marked by `*`, for showing a player their options.
    pub fn with_hints<'a>(&'a self, moves: &'a LocationList) -> impl fmt::Display + 'a {
        HintedBoard { board: self, moves }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_grid(f, |loc| self.at(loc).glyph())
    }
}

struct HintedBoard<'a> {
    board: &'a Board,
    moves: &'a LocationList,
}

impl fmt::Display for HintedBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_grid(f, |loc| {
            if self.moves.contains(loc) {
                '*'
            } else {
                self.board.at(loc).glyph()
            }
        })
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseBoardError;

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid board string")
    }
}

impl std::error::Error for ParseBoardError {}

/// Parse a compact board: 64 cells in row-major order, `X` for black, `O`
/// for white and `-` or `.` for empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut cells = s.chars().filter(|c| !c.is_whitespace());

        for loc in Location::all() {
            let cell = match cells.next().ok_or(ParseBoardError)? {
                'X' | 'x' => Cell::Black,
                'O' | 'o' => Cell::White,
                '-' | '.' => Cell::Empty,
                _ => return Err(ParseBoardError),
            };
            board.put(loc, cell);
        }

        match cells.next() {
            None => Ok(board),
            Some(_) => Err(ParseBoardError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NUM_SPACES;

    #[test]
    fn starting_layout() {
        let board = Board::new();
        assert_eq!(board.get(3, 3), Ok(Cell::White));
        assert_eq!(board.get(3, 4), Ok(Cell::Black));
        assert_eq!(board.get(4, 3), Ok(Cell::Black));
        assert_eq!(board.get(4, 4), Ok(Cell::White));
        assert_eq!(board.count(Cell::Empty), NUM_SPACES - 4);
        assert_eq!(board.scores(), Scores { black: 2, white: 2 });
    }

    #[test]
    fn get_and_set_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.get(8, 0), Err(GameError::OutOfBounds { row: 8, col: 0 }));
        assert_eq!(board.get(0, 8), Err(GameError::OutOfBounds { row: 0, col: 8 }));
        assert_eq!(
            board.set(0, 9, Cell::Black),
            Err(GameError::OutOfBounds { row: 0, col: 9 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn set_then_reset() {
        let mut board = Board::new();
        board.set(0, 0, Cell::Black).unwrap();
        board.set(3, 3, Cell::Empty).unwrap();
        assert_eq!(board.get(0, 0), Ok(Cell::Black));
        assert_eq!(board.scores(), Scores { black: 3, white: 1 });

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn display_starting_board() {
        let expected = "  A B C D E F G H\n\
                        1 . . . . . . . .\n\
                        2 . . . . . . . .\n\
                        3 . . . . . . . .\n\
                        4 . . . O X . . .\n\
                        5 . . . X O . . .\n\
                        6 . . . . . . . .\n\
                        7 . . . . . . . .\n\
                        8 . . . . . . . .";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn display_with_hints() {
        let board = Board::new();
        let moves: LocationList = vec![Location::new(2, 3)].into_iter().collect();
        let rendered = board.with_hints(&moves).to_string();
        assert!(rendered.contains("3 . . . * . . . ."));
    }

    #[test]
    fn parse_board() {
        let board: Board = "
            --------
            --------
            --------
            ---OX---
            ---XO---
            --------
            --------
            --------"
            .parse()
            .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn parse_board_fail() {
        assert_eq!("".parse::<Board>(), Err(ParseBoardError));
        assert_eq!("X".repeat(63).parse::<Board>(), Err(ParseBoardError));
        assert_eq!("X".repeat(65).parse::<Board>(), Err(ParseBoardError));
        assert_eq!("Z".repeat(64).parse::<Board>(), Err(ParseBoardError));
    }
}
