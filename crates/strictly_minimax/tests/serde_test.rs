//! Tests for the serialized forms of engine values.

use strictly_minimax::{Board, Move, Outcome, evaluate_moves};

#[test]
fn test_board_serializes_as_notation() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(json, "\"XX.OO....\"");
}

#[test]
fn test_board_deserializes_from_notation() {
    let board: Board = serde_json::from_str("\"x.o/...|..x\"").unwrap();
    assert_eq!(board.notation(), "X.O.....X");
}

#[test]
fn test_malformed_board_is_rejected() {
    let err = serde_json::from_str::<Board>("\"XXO\"").unwrap_err();
    assert!(err.to_string().contains("Expected 9 cells"));
}

#[test]
fn test_move_and_outcome_json_shape() {
    assert_eq!(
        serde_json::to_value(Move::new(2, 1)).unwrap(),
        serde_json::json!({ "row": 2, "col": 1 })
    );
    assert_eq!(serde_json::to_value(Outcome::XWins).unwrap(), serde_json::json!("XWins"));
}

#[test]
fn test_evaluations_serialize() {
    let board: Board = "XX.OO....".parse().unwrap();
    let evals = evaluate_moves(&board);
    let json = serde_json::to_value(&evals).unwrap();
    assert_eq!(json[0]["mv"], serde_json::json!({ "row": 0, "col": 2 }));
    assert_eq!(json[0]["value"], serde_json::json!(1));
}
