//! Tests for history navigation and move application through the public API.

use rewind_core::{
    Board, Cell, Game, GameHistory, GameStatus, HistoryError, Mark, MoveError, Position,
    WinResult, check_winner,
};

const A: Cell = Cell::Occupied(Mark::PlayerA);
const B: Cell = Cell::Occupied(Mark::PlayerB);
const E: Cell = Cell::Empty;

#[test]
fn test_top_row_winner_reports_line() {
    let board = Board::from_cells([A, A, A, E, E, E, E, E, E]);
    assert_eq!(
        check_winner(&board),
        WinResult::Winner {
            mark: Mark::PlayerA,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
}

#[test]
fn test_full_drawn_board_has_no_winner() {
    let board = Board::from_cells([A, B, A, B, A, B, B, A, B]);
    assert_eq!(check_winner(&board), WinResult::NoWinner);
    assert_eq!(GameStatus::evaluate(&board, 9), GameStatus::Draw);
}

#[test]
fn test_three_moves_from_start() {
    let mut game = Game::new();
    assert!(game.click(0));
    assert!(game.click(1));
    assert!(game.click(2));

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.board().cells(), &[A, B, A, E, E, E, E, E, E]);
}

#[test]
fn test_branching_after_seek_discards_future() {
    let mut game = Game::new();
    for index in [0, 1, 2] {
        game.click(index);
    }
    assert_eq!(game.history().len(), 4);

    game.jump_to(1).unwrap();
    assert!(game.click(4));

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.history().cursor(), 2);
    assert_eq!(game.board().cells(), &[A, E, E, E, B, E, E, E, E]);
}

#[test]
fn test_occupied_click_is_ignored() {
    let mut game = Game::new();
    game.click(4);
    let before = game.history().clone();

    assert!(!game.click(4));
    assert_eq!(game.history(), &before);
}

#[test]
fn test_clicks_after_win_are_ignored() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        assert!(game.click(index));
    }
    assert_eq!(game.status().winner(), Some(Mark::PlayerA));
    let before = game.history().clone();

    for index in 0..9 {
        assert!(!game.click(index));
    }
    assert_eq!(game.history(), &before);
    assert_eq!(game.play(Position::BottomRight), Err(MoveError::GameOver));
}

#[test]
fn test_jump_back_from_win_reopens_play() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        game.click(index);
    }
    game.jump_to(4).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress { next: Mark::PlayerA });

    assert!(game.click(8));
    assert_eq!(game.history().len(), 6);
    assert!(!game.status().is_concluded());
}

#[test]
fn test_turn_parity_follows_move_count() {
    let mut game = Game::new();
    for (k, index) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        let expected = if k % 2 == 0 { Mark::PlayerA } else { Mark::PlayerB };
        assert_eq!(game.to_move(), expected);
        game.click(index);
    }
}

#[test]
fn test_each_valid_move_changes_one_cell() {
    let mut game = Game::new();
    for index in [4, 0, 8, 2, 6, 1] {
        let before = *game.board();
        let len = game.history().len();

        assert!(game.click(index));

        assert_eq!(before.diff(game.board()).len(), 1);
        assert_eq!(game.history().len(), len + 1);
    }
}

#[test]
fn test_seek_out_of_range_is_rejected() {
    let mut history = GameHistory::new();
    assert_eq!(
        history.seek(1),
        Err(HistoryError::MoveOutOfRange { requested: 1, len: 1 })
    );
    assert_eq!(history.cursor(), 0);
}

#[test]
fn test_full_game_draw() {
    // A B A / A B B / B A A
    let history = GameHistory::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .unwrap();
    assert_eq!(history.status(), GameStatus::Draw);
    assert_eq!(history.len(), 10);

    let mut game = Game::from_history(history);
    let before = game.history().clone();
    assert_eq!(game.play(Position::Center), Err(MoveError::GameOver));
    for index in 0..9 {
        assert!(!game.click(index));
    }
    assert_eq!(game.history(), &before);
}

#[test]
fn test_deserialized_history_is_validated() {
    let json = r#"{
        "snapshots": [{
            "board": {"cells": ["Empty", "Empty", "Empty", "Empty", "Empty",
                                "Empty", "Empty", "Empty", "Empty"]},
            "played": null
        }],
        "cursor": 5
    }"#;
    assert!(serde_json::from_str::<GameHistory>(json).is_err());

    let valid = json.replace("\"cursor\": 5", "\"cursor\": 0");
    let history: GameHistory = serde_json::from_str(&valid).expect("Valid history");
    assert_eq!(
        Game::from_history(history).status(),
        GameStatus::InProgress { next: Mark::PlayerA }
    );
}
