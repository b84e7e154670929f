//! Tests for the minimax search.

use strictly_minimax::{
    Board, Move, Outcome, Player, Role, apply_move, best_move, current_player, evaluate_moves,
    initial_state, is_terminal, legal_moves, minimax_value, outcome, utility, winner,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid notation")
}

/// Plays `best_move` for both sides until the game ends.
fn self_play(mut board: Board) -> Board {
    while let Some(mv) = best_move(&board) {
        board = apply_move(&board, mv).expect("engine plays legal moves");
    }
    board
}

#[test]
fn test_x_completes_row_instead_of_anything_else() {
    // X X . / O O . / . . .
    let b = board("XX./OO./...");
    assert_eq!(current_player(&b), Player::X);

    let mv = best_move(&b).expect("game not over");
    assert_eq!(mv, Move::new(0, 2));

    let next = apply_move(&b, mv).unwrap();
    assert_eq!(winner(&next), Some(Player::X));
    assert_eq!(utility(&next), 1);
}

#[test]
fn test_equal_counts_means_x_to_move_and_win() {
    // X O X / X O O / . . .  -- counts are equal, so X moves and takes column 0.
    let b = board("XOX/XOO/...");
    assert_eq!(current_player(&b), Player::X);

    let mv = best_move(&b).unwrap();
    assert_eq!(mv, Move::new(2, 0));
    assert_eq!(winner(&apply_move(&b, mv).unwrap()), Some(Player::X));
}

#[test]
fn test_o_blocks_column_and_game_is_drawn() {
    // X O X / X . O / . . .  -- X threatens column 0, O has no win of its own.
    let b = board("XOX/X.O/...");
    assert_eq!(current_player(&b), Player::O);

    let mv = best_move(&b).unwrap();
    assert_eq!(mv, Move::new(2, 0));

    let values = evaluate_moves(&b);
    for eval in &values {
        let expected = if eval.mv == Move::new(2, 0) { 0 } else { 1 };
        assert_eq!(eval.value, expected, "move {}", eval.mv);
    }

    let end = self_play(apply_move(&b, mv).unwrap());
    assert_eq!(outcome(&end), Some(Outcome::Draw));
}

#[test]
fn test_optimal_play_from_empty_board_draws() {
    let first = best_move(&initial_state()).expect("empty board has moves");
    assert!(legal_moves(&initial_state()).contains(&first));

    let end = self_play(initial_state());
    assert!(is_terminal(&end));
    assert_eq!(outcome(&end), Some(Outcome::Draw));
    assert_eq!(utility(&end), 0);
}

#[test]
fn test_every_opening_move_draws() {
    let values = evaluate_moves(&initial_state());
    assert_eq!(values.len(), 9);
    assert!(values.iter().all(|eval| eval.value == 0));
}

#[test]
fn test_optimal_reply_to_any_opening_draws() {
    for opening in Move::ALL {
        let b = apply_move(&initial_state(), opening).unwrap();
        let end = self_play(b);
        assert_eq!(outcome(&end), Some(Outcome::Draw), "opening {}", opening);
    }
}

#[test]
fn test_engine_punishes_a_blunder() {
    // X in a corner, O answers on an edge: X can force a win.
    let b = board("XO.......");
    assert_eq!(minimax_value(&b, Role::Maximizing), 1);
    let end = self_play(b);
    assert_eq!(outcome(&end), Some(Outcome::XWins));
}

#[test]
fn test_value_agrees_with_best_move() {
    for notation in ["X........", "X...O....", "XO..X....", "X.O.X..O."] {
        let b = board(notation);
        let role = Role::for_player(current_player(&b));
        let mv = best_move(&b).unwrap();
        let child = apply_move(&b, mv).unwrap();
        assert_eq!(
            minimax_value(&child, role.next()),
            minimax_value(&b, role),
            "board {}",
            notation
        );
    }
}

#[test]
fn test_search_leaves_board_untouched() {
    let b = board("X...O....");
    let copy = b;
    let _ = best_move(&b);
    let _ = evaluate_moves(&b);
    assert_eq!(b, copy);
}
