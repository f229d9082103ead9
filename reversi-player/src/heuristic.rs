//! The computer opponent: a fixed positional priority table.
//!
//! Moves are picked in tiers, first match wins:
//!
//!  1. a corner, in the order of [`CORNERS`];
//!  2. one of the [`PREFERRED`] squares, in table order;
//!  3. the first legal move (row-major) that is not in [`CORNER_ADJACENT`];
//!  4. the first legal move.
//!
//! This is a static table, not a search. It never counts how many discs a
//! move flips and never looks at the reply, so it is easy to beat; that
//! weakness is intentional.

use crate::Strategy;
use reversi_engine::{GameState, Location};

/// Tier 1.
pub const CORNERS: [Location; 4] = [
    Location::new(0, 0),
    Location::new(0, 7),
    Location::new(7, 0),
    Location::new(7, 7),
];

/// Tier 2: edge and near-edge squares two steps in from a corner.
pub const PREFERRED: [Location; 12] = [
    Location::new(0, 2),
    Location::new(2, 0),
    Location::new(2, 2),
    Location::new(0, 5),
    Location::new(2, 7),
    Location::new(5, 0),
    Location::new(5, 2),
    Location::new(7, 2),
    Location::new(5, 7),
    Location::new(7, 5),
    Location::new(2, 5),
    Location::new(5, 5),
];

/// Squares next to a corner, which tend to hand that corner to the opponent.
/// Tier 3 skips them.
pub const CORNER_ADJACENT: [Location; 12] = [
    Location::new(0, 1),
    Location::new(1, 0),
    Location::new(1, 1),
    Location::new(0, 6),
    Location::new(1, 6),
    Location::new(1, 7),
    Location::new(6, 0),
    Location::new(6, 1),
    Location::new(7, 1),
    Location::new(6, 6),
    Location::new(6, 7),
    Location::new(7, 6),
];

/// Pick a move from `legal_moves`, which should be in row-major order as
/// returned by [`GameState::legal_moves`]. Returns None only for an empty list.
pub fn choose_move(legal_moves: &[Location]) -> Option<Location> {
    let first_listed = |table: &[Location]| {
        table
            .iter()
            .copied()
            .find(|loc| legal_moves.contains(loc))
    };

    first_listed(&CORNERS[..])
        .or_else(|| first_listed(&PREFERRED[..]))
        .or_else(|| {
            legal_moves
                .iter()
                .copied()
                .find(|loc| !CORNER_ADJACENT.contains(loc))
        })
        .or_else(|| legal_moves.first().copied())
}

/// [`choose_move`] as a [`Strategy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionalHeuristic;

impl Strategy for PositionalHeuristic {
    fn choose_move(&self, state: &GameState) -> Option<Location> {
        choose_move(&state.legal_moves())
    }
}
