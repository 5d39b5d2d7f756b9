use crate::board::{Board, Move};
use crate::search::draw_jitter;

/// Negamax: every node is scored from the side to move. A won terminal is
/// always evaluated from the loser's turn (the winning mark was just placed
/// by the other side), so it is -1 unconditionally; child scores are negated
/// on the way up and the maximum kept.
pub fn negamax(board: &mut Board) -> (f32, Option<Move>) {
    if board.winner().is_some() {
        return (-1.0, None);
    }
    if board.is_drawn() {
        return (draw_jitter(), None);
    }

    let mut best_score = f32::NEG_INFINITY;
    let mut best_move = None;

    for mv in board.available_moves() {
        board.apply(mv);
        let (reply, _) = negamax(board);
        board.undo(mv);

        let score = -reply;
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    (best_score, best_move)
}
