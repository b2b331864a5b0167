//! Terminal event translation.
//!
//! Mouse clicks are resolved against the screen areas recorded during the
//! last draw. The digit keys 1-9 stand in for a click on the matching cell
//! in terminals that do not report the mouse.

use crate::app::AppEvent;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position as ScreenPosition, Rect};
use tictactoe_core::Position;
use tracing::{debug, instrument};

/// Clickable screen areas from the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    cells: Vec<(Rect, Position)>,
    moves: Vec<(Rect, usize)>,
}

impl HitMap {
    /// Creates an empty hit map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the area of a board cell.
    pub fn add_cell(&mut self, area: Rect, position: Position) {
        self.cells.push((area, position));
    }

    /// Records the area of a move-list entry.
    pub fn add_move(&mut self, area: Rect, move_number: usize) {
        self.moves.push((area, move_number));
    }

    /// Board cell under the given screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .find(|(area, _)| area.contains(point))
            .map(|(_, pos)| *pos)
    }

    /// Move-list entry under the given screen coordinate.
    pub fn move_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = ScreenPosition::new(column, row);
        self.moves
            .iter()
            .find(|(area, _)| area.contains(point))
            .map(|(_, n)| *n)
    }

    /// Recorded cell areas.
    pub fn cells(&self) -> &[(Rect, Position)] {
        &self.cells
    }

    /// Recorded move-list areas.
    pub fn moves(&self) -> &[(Rect, usize)] {
        &self.moves
    }
}

/// Maps a terminal event to an application event, if it means anything.
#[instrument(skip(hit_map))]
pub fn translate(event: &Event, hit_map: &HitMap) -> Option<AppEvent> {
    let translated = match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, hit_map),
        _ => None,
    };
    if let Some(app_event) = &translated {
        debug!(?app_event, "Translated terminal event");
    }
    translated
}

fn translate_key(key: &KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppEvent::Quit)
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(AppEvent::CellClicked)
        }
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, hit_map: &HitMap) -> Option<AppEvent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if let Some(pos) = hit_map.cell_at(mouse.column, mouse.row) {
        return Some(AppEvent::CellClicked(pos));
    }
    hit_map
        .move_at(mouse.column, mouse.row)
        .map(AppEvent::HistorySelected)
}
