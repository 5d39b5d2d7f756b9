use crate::board::{Board, Move};
use crate::search::draw_jitter;

/// Negamax with alpha-beta pruning. Same terminal contract and traversal as
/// the unpruned searcher; only the window bookkeeping differs, so the chosen
/// score's game-theoretic value is identical.
pub fn alphabeta(board: &mut Board) -> (f32, Option<Move>) {
    alphabeta_window(board, f32::NEG_INFINITY, f32::INFINITY)
}

fn alphabeta_window(board: &mut Board, alpha: f32, beta: f32) -> (f32, Option<Move>) {
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
        // The child's perspective is ours negated, so the window flips and
        // narrows by the best score already banked at this node.
        let (reply, _) = alphabeta_window(board, -beta, -alpha.max(best_score));
        board.undo(mv);

        let score = -reply;
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }

        // Cutoff: the caller already has a line at least this good from
        // another branch. The undo above has run, so the board is restored
        // on this early exit too.
        if best_score >= beta {
            return (best_score, best_move);
        }
    }

    (best_score, best_move)
}
