//! Command-line interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::TurnPolicy;

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Whether jumping through history rewinds whose turn it is
    #[arg(long, value_enum, global = true)]
    pub turn_policy: Option<TurnPolicyArg>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Cell indices 0-8 in row-major order, e.g. `0,4,8`
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Jump to this move number after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Command-line spelling of [`TurnPolicy`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPolicyArg {
    /// Keep the current player when jumping
    Retain,
    /// Recompute the current player from the truncated history
    Recompute,
}

impl From<TurnPolicyArg> for TurnPolicy {
    fn from(arg: TurnPolicyArg) -> Self {
        match arg {
            TurnPolicyArg::Retain => TurnPolicy::Retain,
            TurnPolicyArg::Recompute => TurnPolicy::Recompute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.turn_policy, None);
    }

    #[test]
    fn test_replay_parses_comma_separated_moves() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "replay",
            "0,4,8",
            "--jump",
            "1",
            "--turn-policy",
            "recompute",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 4, 8],
                jump: Some(1),
                json: false,
            })
        );
        assert_eq!(cli.turn_policy, Some(TurnPolicyArg::Recompute));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }
}
