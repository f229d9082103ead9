//! Random self-play checking the invariants that must hold in every reachable position.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use reversi_engine::{Cell, GameError, GameState, Location, NUM_SPACES};

const GAMES: u64 = 40;

fn cell_total(game: &GameState) -> usize {
    let board = game.board();
    board.count(Cell::Black) + board.count(Cell::White) + board.count(Cell::Empty)
}

fn disc_total(game: &GameState) -> usize {
    let scores = game.scores();
    (scores.black + scores.white) as usize
}

#[test]
fn random_games_keep_invariants() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new();
        let mut plies = 0;

        while !game.is_terminal() {
            assert_eq!(cell_total(&game), NUM_SPACES);

            let moves = game.legal_moves();
            assert_eq!(moves, game.legal_moves());
            // Automatic passes never leave a stuck player to move.
            assert!(!moves.is_empty());

            // A random cell outside the legal set is refused without side effects.
            let probe = Location::from_index(rng.gen_range(0..NUM_SPACES)).unwrap();
            if !moves.contains(probe) {
                let before = game;
                let (row, col) = probe.to_coords();
                assert_eq!(
                    game.submit_move(row, col),
                    Err(GameError::IllegalMove { row, col })
                );
                assert_eq!(game, before);
            }

            let mover = game.current_player();
            let before = game.scores();
            let discs_before = disc_total(&game);
            let &mv = moves.choose(&mut rng).unwrap();
            let (row, col) = mv.to_coords();
            let outcome = game.submit_move(row, col).unwrap();

            let after = game.scores();
            let flipped = outcome.flipped.len() as u8;
            assert!(flipped > 0);
            assert_eq!(after.of(mover), before.of(mover) + 1 + flipped);
            assert_eq!(after.of(!mover), before.of(!mover) - flipped);
            assert_eq!(disc_total(&game), discs_before + 1);
            assert_eq!(outcome.state, game);

            if !game.is_terminal() {
                assert!(game.consecutive_passes() <= 1);
                match outcome.forced_pass {
                    Some(skipped) => {
                        assert_eq!(skipped, !mover);
                        assert_eq!(game.current_player(), mover);
                    }
                    None => assert_eq!(game.current_player(), !mover),
                }
            }

            plies += 1;
            assert!(plies <= NUM_SPACES - 4);
        }

        assert_eq!(game.consecutive_passes(), 2);
        assert!(game.legal_moves().is_empty());
        assert!(game.outcome().is_some());
    }
}
