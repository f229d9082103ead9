//! `reversi-engine` holds the complete rules of Reversi for engines and UIs.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Board`] is a plain 8x8 grid of [`Cell`]s with no knowledge of the rules.
//!  - [`rules`] contains the pure rule functions over a [`Board`]: legal-move
//!    enumeration, the would-capture scan and capture application. They do not
//!    track whose turn it is, so callers must keep the player straight themselves.
//!  - [`GameState`] is the safe, high-level interface: it owns a board and the
//!    turn/pass bookkeeping, rejects illegal requests and reports every change
//!    as data.
//!
//! Nothing in this crate renders, sleeps or persists. Presentation layers drive
//! a [`GameState`] and replay the returned deltas however they like.

pub mod rules;
pub mod test_utils;

mod board;
mod error;
mod game;
mod location;
mod utils;

pub use board::*;
pub use error::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
