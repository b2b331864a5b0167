//! Move list rendering.

use crate::input::HitMap;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::GameView;

/// Renders the numbered move list and records each entry's row.
///
/// Entries that do not fit are not drawn and cannot be clicked.
pub fn render_moves(f: &mut Frame, area: Rect, view: &GameView, hit_map: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL).title("History");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED);

    for (i, entry) in view.moves().iter().enumerate().take(inner.height as usize) {
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let label = Paragraph::new(format!("{}. {}", i + 1, entry)).style(style);
        f.render_widget(label, row);
        hit_map.add_move(row, entry.move_number);
    }
}
