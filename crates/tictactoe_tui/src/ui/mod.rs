//! UI rendering using ratatui.

mod board;
mod moves;

use crate::app::App;
use crate::input::HitMap;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, CellView, Status};

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, render_board};
pub use moves::render_moves;

/// Draws the whole screen and returns the clickable areas.
pub fn draw(f: &mut Frame, app: &App) -> HitMap {
    let view = app.view();
    let mut hit_map = HitMap::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(20)])
        .split(chunks[1]);

    let board_block = Block::default().borders(Borders::ALL).title("Board");
    let board_area = board_block.inner(body[0]);
    f.render_widget(board_block, body[0]);
    render_board(f, board_area, &view, app.cell_hints(), &mut hit_map);

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body[1]);

    let status_style = match view.status() {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status().to_string())
        .style(status_style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, info[0]);

    render_moves(f, info[1], &view, &mut hit_map);

    let help = Paragraph::new("Click a square or press 1-9 | Click a move to go back | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);

    hit_map
}

/// Text shown for a cell.
pub fn cell_symbol(cell: &CellView, hints: bool) -> String {
    match cell.cell {
        Cell::Occupied(token) => token.to_string(),
        Cell::Empty if hints => (cell.position.to_index() + 1).to_string(),
        Cell::Empty => " ".to_string(),
    }
}
