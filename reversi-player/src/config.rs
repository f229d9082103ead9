//! Command-line configuration for the `play` binary.

use clap::{Parser, ValueEnum};
use reversi_engine::Player;

/// Play Reversi in the terminal against a positional heuristic.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "play", version)]
pub struct PlayConfig {
    /// Color the human plays; "none" lets the computer play both sides
    #[arg(long, value_enum, default_value_t = HumanSide::Black)]
    pub human: HumanSide,

    /// Mark the legal moves on the board before each human turn
    #[arg(long)]
    pub hints: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanSide {
    Black,
    White,
    None,
}

impl HumanSide {
    /// The color a human sits at, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            HumanSide::Black => Some(Player::Black),
            HumanSide::White => Some(Player::White),
            HumanSide::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PlayConfig::try_parse_from(["play"]).unwrap();
        assert_eq!(config.human, HumanSide::Black);
        assert!(!config.hints);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn explicit_flags() {
        let config = PlayConfig::try_parse_from([
            "play",
            "--human",
            "none",
            "--hints",
            "--log-filter",
            "reversi_engine=debug",
        ])
        .unwrap();
        assert_eq!(config.human.player(), None);
        assert!(config.hints);
        assert_eq!(config.log_filter, "reversi_engine=debug");
    }

    #[test]
    fn unknown_side_is_rejected() {
        assert!(PlayConfig::try_parse_from(["play", "--human", "red"]).is_err());
    }
}
