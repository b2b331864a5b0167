//! Non-interactive replay of a move sequence.

use crate::config::TuiConfig;
use crate::ui::cell_symbol;
use anyhow::{Context, Result, anyhow};
use std::fmt::Write;
use tictactoe_core::{GameState, GameView, Position, TurnPolicy};
use tracing::{debug, info, instrument};

/// Applies `moves` (cell indices) to a new game, then optionally jumps.
///
/// Every index is validated before any move is applied. Moves the game
/// ignores (occupied cell, board already won) are skipped the same way a
/// click would be.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, turn_policy: TurnPolicy) -> Result<GameState> {
    let positions = moves
        .iter()
        .map(|&index| {
            Position::from_index(index)
                .ok_or_else(|| anyhow!("Cell index {} is out of range (must be 0-8)", index))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut game = GameState::with_turn_policy(turn_policy);
    for position in positions {
        let outcome = game.apply_move(position);
        debug!(?outcome, "Replayed move");
    }

    if let Some(move_number) = jump {
        game.jump_to(move_number)
            .with_context(|| format!("Cannot jump to move {}", move_number))?;
    }

    info!(moves = game.history().moves_played(), "Replay finished");
    Ok(game)
}

/// Renders a view as plain text: board, status, then the move list.
///
/// Winning cells are bracketed.
pub fn render_text(view: &GameView, hints: bool) -> String {
    let mut out = String::new();
    for (i, row) in view.rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                let symbol = cell_symbol(cell, hints);
                if cell.is_winner {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if i < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    let _ = writeln!(out, "{}", view.status());
    for (i, entry) in view.moves().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, entry);
    }
    out
}

/// Runs the `replay` command, printing to stdout.
pub fn run(moves: &[usize], jump: Option<usize>, json: bool, config: &TuiConfig) -> Result<()> {
    let game = replay(moves, jump, *config.turn_policy())?;
    let view = game.view();

    if json {
        let text = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        println!("{}", text);
    } else {
        print!("{}", render_text(&view, *config.cell_hints()));
    }
    Ok(())
}
