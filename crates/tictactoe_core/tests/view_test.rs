//! Tests for the presentation view.

use tictactoe_core::{GameState, Position, Status, Token};

#[test]
fn test_winning_cells_are_flagged() {
    let mut game = GameState::new();
    // X: 2, 4, 6 / O: 0, 1
    for index in [2, 0, 4, 1, 6] {
        game.apply_move(Position::from_index(index).unwrap());
    }

    let view = game.view();
    assert_eq!(view.status(), &Status::Winner(Token::X));
    assert_eq!(view.status().to_string(), "Winner: X");

    let flagged: Vec<usize> = view
        .cells()
        .iter()
        .filter(|c| c.is_winner)
        .map(|c| c.position.to_index())
        .collect();
    assert_eq!(flagged, vec![2, 4, 6]);
    assert_eq!(
        view.winning_line().map(|line| line.map(Position::to_index)),
        Some([6, 4, 2])
    );
}

#[test]
fn test_move_list_labels() {
    let mut game = GameState::new();
    game.apply_move(Position::Center);
    game.apply_move(Position::TopLeft);

    let labels: Vec<String> = game.view().moves().iter().map(ToString::to_string).collect();
    assert_eq!(labels, vec!["Game Start", "Move #1", "Move #2"]);
}

#[test]
fn test_status_shows_next_player() {
    let mut game = GameState::new();
    game.apply_move(Position::Center);
    assert_eq!(game.view().status().to_string(), "Next player: O");
}

#[test]
fn test_view_serializes_for_frontends() {
    let mut game = GameState::new();
    game.apply_move(Position::Center);

    let json = serde_json::to_value(game.view()).unwrap();
    assert_eq!(json["status"], serde_json::json!({ "NextPlayer": "O" }));
    assert_eq!(json["cells"][4]["cell"], serde_json::json!({ "Occupied": "X" }));
    assert_eq!(json["cells"][4]["is_winner"], serde_json::json!(false));
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(2));
    assert!(json["winning_line"].is_null());
}
