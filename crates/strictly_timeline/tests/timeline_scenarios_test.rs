//! Scenario tests for game history: wins, draws, rejected moves and jumps.

use strictly_timeline::{GameHistory, GameStatus, PlayOutcome, Player};

fn play_all(cells: &[usize]) -> GameHistory {
    let mut history = GameHistory::new();
    for &cell in cells {
        history.play_index(cell).expect("cell in range");
    }
    history
}

#[test]
fn test_no_win_after_five_moves() {
    let history = play_all(&[0, 4, 1, 3, 8]);
    assert!(history.winner().is_none());
    assert!(!history.is_draw());
    assert_eq!(history.status().to_string(), "Next player: O");
    assert_eq!(history.history_len(), 6);
}

#[test]
fn test_top_row_win() {
    let history = play_all(&[0, 3, 1, 4, 2]);
    let line = history.winner().expect("X completes the top row");
    assert_eq!(line.indices(), [0, 1, 2]);
    assert_eq!(history.status().to_string(), "Winner: X");
    assert_eq!(history.status().winner(), Some(Player::X));
}

#[test]
fn test_o_win_reports_o() {
    // X: 0, 1, 8  O: 3, 4, 5
    let history = play_all(&[0, 3, 1, 4, 8, 5]);
    assert_eq!(history.winner().map(|l| l.indices()), Some([3, 4, 5]));
    assert_eq!(history.status().to_string(), "Winner: O");
}

#[test]
fn test_full_board_draw() {
    // X: 0, 1, 5, 6, 8  O: 2, 3, 4, 7
    let history = play_all(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert!(history.winner().is_none());
    assert!(history.is_draw());
    assert_eq!(history.status(), GameStatus::Draw);
    assert_eq!(history.status().to_string(), "Result: Draw");
}

#[test]
fn test_move_after_win_is_noop() {
    let mut history = play_all(&[0, 3, 1, 4, 2]);
    let before = history.clone();

    assert_eq!(history.play_index(6), Ok(PlayOutcome::GameOver));
    assert_eq!(history, before);
    assert_eq!(history.history_len(), 6);
    assert_eq!(history.current_move(), 5);
}

#[test]
fn test_move_allowed_after_jumping_back_from_win() {
    let mut history = play_all(&[0, 3, 1, 4, 2]);
    history.jump_to(4).unwrap();
    assert!(history.winner().is_none());

    // The old winning move is discarded.
    assert!(history.play_index(8).unwrap().is_placed());
    assert_eq!(history.history_len(), 6);
    assert_eq!(history.position(5).map(|p| p.to_index()), Some(8));
    assert!(history.winner().is_none());
}

#[test]
fn test_repeated_jump_is_stable() {
    let mut history = play_all(&[4, 0, 8]);
    history.jump_to(1).unwrap();
    let board = *history.current_board();
    history.jump_to(1).unwrap();

    assert_eq!(*history.current_board(), board);
    assert_eq!(history.current_move(), 1);
    assert_eq!(history.history_len(), 4);
}

#[test]
fn test_jump_after_win_is_allowed() {
    let mut history = play_all(&[0, 3, 1, 4, 2]);
    history.jump_to(0).unwrap();
    assert_eq!(history.status().to_string(), "Next player: X");
    history.jump_to(5).unwrap();
    assert_eq!(history.status().to_string(), "Winner: X");
}

#[test]
fn test_move_list_labels() {
    let mut history = play_all(&[4, 0, 5]);
    history.jump_to(2).unwrap();

    let labels: Vec<String> = history.moves().map(|m| m.label.to_string()).collect();
    assert_eq!(labels, vec!["game start", "(1, 1)", "(0, 0)", "(1, 2)"]);

    let current: Vec<bool> = history.moves().map(|m| m.is_current).collect();
    assert_eq!(current, vec![false, false, true, false]);
}

#[test]
fn test_history_serializes() {
    let history = play_all(&[4]);
    let json = serde_json::to_value(&history).unwrap();
    assert_eq!(json["cursor"], 1);
    assert_eq!(json["entries"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["entries"][1]["position"], "Center");
}
