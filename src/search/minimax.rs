use crate::board::{Board, Move, Player};
use crate::search::draw_jitter;

/// Textbook two-sided minimax, no pruning, no depth limit: the tree is small
/// enough to search to exhaustion. Scores are absolute, X maximizing and O
/// minimizing, so terminal wins report the exact winner's sign.
pub fn minimax(board: &mut Board) -> (f32, Option<Move>) {
    if let Some(winner) = board.winner() {
        return match winner {
            Player::X => (1.0, None),
            Player::O => (-1.0, None),
        };
    }
    if board.is_drawn() {
        return (draw_jitter(), None);
    }

    let maximizing = board.first_player_to_move();
    let mut best_score = if maximizing { f32::NEG_INFINITY } else { f32::INFINITY };
    let mut best_move = None;

    for mv in board.available_moves() {
        board.apply(mv);
        let (score, _) = minimax(board);
        board.undo(mv);

        let improved = if maximizing { score > best_score } else { score < best_score };
        if improved {
            best_score = score;
            best_move = Some(mv);
        }
    }

    (best_score, best_move)
}
