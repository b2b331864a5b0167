//! Tic-tac-toe board rendering.

use super::cell_symbol;
use crate::input::HitMap;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tictactoe_core::{Cell, CellView, GameView, Token};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Width of the rendered board, separators included.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the rendered board, separators included.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the board centered in `area` and records each cell's area.
pub fn render_board(f: &mut Frame, area: Rect, view: &GameView, hints: bool, hit_map: &mut HitMap) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = split_with_separators(board_area, Direction::Vertical, CELL_HEIGHT);
    for sep in [rows[1], rows[3]] {
        render_separator(f, sep);
    }

    let grid: Vec<Vec<Rect>> = (0..3)
        .map(|row| {
            let cols = split_with_separators(rows[row * 2], Direction::Horizontal, CELL_WIDTH);
            for sep in [cols[1], cols[3]] {
                render_vertical_sep(f, sep);
            }
            (0..3).map(|col| cols[col * 2]).collect()
        })
        .collect();

    for cell in view.cells() {
        let cell_area = grid[cell.position.row()][cell.position.column()];
        render_cell(f, cell_area, cell, hints);
        hit_map.add_cell(cell_area, cell.position);
    }
}

/// Three `size` tracks with a one-cell separator between each.
fn split_with_separators(area: Rect, direction: Direction, size: u16) -> Vec<Rect> {
    Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Length(size),
            Constraint::Length(1),
            Constraint::Length(size),
            Constraint::Length(1),
            Constraint::Length(size),
        ])
        .split(area)
        .to_vec()
}

fn render_cell(f: &mut Frame, area: Rect, cell: &CellView, hints: bool) {
    let base = match cell.cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Token::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Occupied(Token::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    let style = if cell.is_winner {
        base.bg(Color::Green).fg(Color::Black)
    } else {
        base
    };

    let text = vec![
        Line::from(""),
        Line::from(cell_symbol(cell, hints)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
