use super::Connector;
use reversi_engine::{Action, GameError, GameState, Player};
use std::io::{self, BufRead, Write};

/// A seat played by a person typing moves ("D3", or "quit" to stop).
/// `pass` is only accepted when the player has no legal move.
pub struct ConsoleConnector<R, W> {
    player: Player,
    input: R,
    output: W,
    hints: bool,
}

impl ConsoleConnector<io::StdinLock<'static>, io::Stdout> {
    /// Read from stdin and prompt on stdout.
    pub fn stdio(player: Player, hints: bool) -> Self {
        Self::new(player, io::stdin().lock(), io::stdout(), hints)
    }
}

impl<R: BufRead, W: Write> ConsoleConnector<R, W> {
    pub fn new(player: Player, input: R, output: W, hints: bool) -> Self {
        Self {
            player,
            input,
            output,
            hints,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("quit") {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "player quit"));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Connector for ConsoleConnector<R, W> {
    fn player_color(&self) -> Player {
        self.player
    }

    fn choose_action(&mut self, state: &GameState) -> io::Result<Action> {
        let moves = state.legal_moves();
        if self.hints {
            writeln!(self.output, "{}", state.board().with_hints(&moves))?;
        }

        loop {
            if moves.is_empty() {
                write!(self.output, "{} has no legal moves, enter 'pass': ", self.player)?;
            } else if self.hints {
                write!(self.output, "{} to move {}: ", self.player, moves)?;
            } else {
                write!(self.output, "{} to move: ", self.player)?;
            }
            self.output.flush()?;

            match self.read_line()?.parse() {
                Ok(Action::Pass) if !moves.is_empty() => {
                    writeln!(self.output, "You can only pass when you have no legal moves.")?
                }
                Ok(action) => return Ok(action),
                Err(error) => writeln!(self.output, "Cannot parse move: {}.", error)?,
            }
        }
    }

    fn rejected(&mut self, action: Action, error: GameError) -> io::Result<()> {
        writeln!(self.output, "Invalid move {}: {}.", action, error)
    }

    fn play_again(&mut self) -> io::Result<bool> {
        write!(self.output, "Play again? [y/N]: ")?;
        self.output.flush()?;

        match self.read_line() {
            Ok(line) => Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")),
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_engine::Location;

    fn console(input: &str, hints: bool) -> ConsoleConnector<&[u8], Vec<u8>> {
        ConsoleConnector::new(Player::Black, input.as_bytes(), Vec::new(), hints)
    }

    #[test]
    fn reads_a_move() {
        let mut seat = console("d3\n", false);
        let action = seat.choose_action(&GameState::new()).unwrap();
        assert_eq!(action, Action::Place(Location::new(2, 3)));

        let output = String::from_utf8(seat.into_output()).unwrap();
        assert_eq!(output, "Black to move: ");
    }

    #[test]
    fn asks_again_after_garbage() {
        let mut seat = console("hello\nd3\n", false);
        let action = seat.choose_action(&GameState::new()).unwrap();
        assert_eq!(action, Action::Place(Location::new(2, 3)));

        let output = String::from_utf8(seat.into_output()).unwrap();
        assert!(output.contains("Cannot parse move"));
        assert_eq!(output.matches("Black to move").count(), 2);
    }

    #[test]
    fn pass_refused_while_moves_exist() {
        let mut seat = console("pass\nf5\n", false);
        let action = seat.choose_action(&GameState::new()).unwrap();
        assert_eq!(action, Action::Place(Location::new(4, 5)));

        let output = String::from_utf8(seat.into_output()).unwrap();
        assert!(output.contains("You can only pass when you have no legal moves."));
        assert_eq!(output.matches("Black to move").count(), 2);
    }

    #[test]
    fn pass_accepted_when_stuck() {
        let board = "X".repeat(63) + "-";
        let state = GameState::from_position(board.parse().unwrap(), Player::Black);
        let mut seat = console("pass\n", false);
        let action = seat.choose_action(&state).unwrap();
        assert_eq!(action, Action::Pass);

        let output = String::from_utf8(seat.into_output()).unwrap();
        assert!(output.starts_with("Black has no legal moves, enter 'pass': "));
    }

    #[test]
    fn hints_list_the_moves() {
        let mut seat = console("c4\n", true);
        seat.choose_action(&GameState::new()).unwrap();

        let output = String::from_utf8(seat.into_output()).unwrap();
        assert!(output.contains("3 . . . * . . . ."));
        assert!(output.contains("Black to move [D3, C4, F5, E6]: "));
    }

    #[test]
    fn quit_and_end_of_input_stop_the_game() {
        let error = console("quit\n", false)
            .choose_action(&GameState::new())
            .unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);

        let error = console("", false)
            .choose_action(&GameState::new())
            .unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn asks_to_play_again() {
        assert!(console("y\n", false).play_again().unwrap());
        assert!(console("Yes\n", false).play_again().unwrap());
        assert!(!console("n\n", false).play_again().unwrap());
        assert!(!console("quit\n", false).play_again().unwrap());
        assert!(!console("", false).play_again().unwrap());
    }

    #[test]
    fn rejection_is_reported() {
        let mut seat = console("", false);
        seat.rejected(
            Action::Place(Location::new(0, 0)),
            GameError::IllegalMove { row: 0, col: 0 },
        )
        .unwrap();

        let output = String::from_utf8(seat.into_output()).unwrap();
        assert_eq!(output, "Invalid move A1: (0, 0) is not a legal move.\n");
    }
}
