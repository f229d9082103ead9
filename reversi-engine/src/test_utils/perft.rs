//! "Perft" performance test: count the number of leaves at a given depth.
//! Checks move generation and capture code against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;
use crate::game::Player;
use crate::rules;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::Black, depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = rules::legal_moves(&board, player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| {
            let mut next = board;
            rules::apply_move(&mut next, player, mv);
            leaves_below(next, !player, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}
