//! The raw, unchecked rule functions of Reversi.
//!
//! These work on a bare [`Board`] plus the player to move and keep no turn
//! state of their own. They are fast enough for move generation in tight
//! loops, but nothing stops a caller from applying a move for the wrong
//! player. [`crate::GameState`] wraps them with the turn, pass and
//! end-of-game bookkeeping and is the interface to prefer.

use crate::board::{Board, Cell};
use crate::game::Player;
use crate::location::{Location, LocationList, MoveList};

/// The eight unit steps a capture line can follow, as `(d_row, d_col)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Collect the opponent discs `player` would capture along one direction
/// from `origin`: a non-empty run of opponent discs closed by one of the
/// player's own. Running off the board or into an empty cell captures nothing.
/// The origin cell itself is not inspected.
pub fn capture_line(
    board: &Board,
    player: Player,
    origin: Location,
    (d_row, d_col): (isize, isize),
) -> LocationList {
    let own = Cell::from(player);
    let opponent = Cell::from(!player);
    let mut run = LocationList::new();
    let mut cursor = origin.offset(d_row, d_col);

    while let Some(loc) = cursor {
        let cell = board.at(loc);
        if cell == opponent {
            run.push(loc);
            cursor = loc.offset(d_row, d_col);
        } else if cell == own {
            return run;
        } else {
            break;
        }
    }

    LocationList::new()
}

/// Whether placing at `origin` would capture anything along one direction.
pub fn would_capture(board: &Board, player: Player, origin: Location, direction: (isize, isize)) -> bool {
    let (d_row, d_col) = direction;
    let opponent = Cell::from(!player);

    match origin.offset(d_row, d_col) {
        Some(next) if board.at(next) == opponent => {
            !capture_line(board, player, origin, direction).is_empty()
        }
        _ => false,
    }
}

/// Whether `loc` is a legal move for `player`: empty and capturing in some direction.
pub fn is_legal(board: &Board, player: Player, loc: Location) -> bool {
    board.at(loc) == Cell::Empty
        && DIRECTIONS
            .iter()
            .any(|&direction| would_capture(board, player, loc, direction))
}

/// Every legal move for `player`, in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> MoveList {
    Location::all()
        .filter(|&loc| is_legal(board, player, loc))
        .collect()
}

/// Every disc a placement at `loc` would flip, gathered over all eight
/// directions before anything changes. Flips in one direction never open a
/// capture in another, so the order of the result is the direction order.
pub fn flips(board: &Board, player: Player, loc: Location) -> LocationList {
    DIRECTIONS
        .iter()
        .flat_map(|&direction| capture_line(board, player, loc, direction))
        .collect()
}

/// Place a disc for `player` at `loc` and flip every captured disc.
/// Returns the flipped locations.
///
/// Unchecked: `loc` should satisfy [`is_legal`]. An illegal placement still
/// puts the disc down and flips whatever closed lines exist.
pub fn apply_move(board: &mut Board, player: Player, loc: Location) -> LocationList {
    let flipped = flips(board, player, loc);
    let own = Cell::from(player);

    board.put(loc, own);
    for &captured in &flipped {
        board.put(captured, own);
    }

    flipped
}
