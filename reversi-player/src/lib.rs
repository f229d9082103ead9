//! Play Reversi against a computer opponent, or watch it play itself.
//!
//! The crate has no rules of its own: every move goes through a
//! [`reversi_engine::GameState`], whoever picked it.

pub mod config;
pub mod connectors;
pub mod driver;
pub mod heuristic;
pub mod logging;

use reversi_engine::{GameState, Location};

/// A way of picking a move for the player to act in `state`.
pub trait Strategy {
    /// Pick one of `state`'s legal moves, or None if there are none.
    fn choose_move(&self, state: &GameState) -> Option<Location>;
}
