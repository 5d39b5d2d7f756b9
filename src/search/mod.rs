use rand::Rng;

use crate::board::{Board, Move};

pub mod alphabeta;
pub mod minimax;
pub mod negamax;

/// Exclusive upper bound on the random score handed to drawn leaves.
pub const DRAW_JITTER: f32 = 0.1;

/// Drawn leaves score a fresh small positive number instead of a flat zero,
/// nudging the engine to vary its play among equally drawn lines. Drawn
/// independently at every leaf visit, deliberately unseeded.
pub(crate) fn draw_jitter() -> f32 {
    rand::thread_rng().gen_range(0.0..DRAW_JITTER)
}

/// The three interchangeable searchers. All return the same game-theoretic
/// value from the same position; tie-breaks among equally good moves differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Minimax,
    Negamax,
    AlphaBeta,
}

impl Strategy {
    /// Search the position to exhaustion. The board is mutated during the
    /// search and restored exactly before this returns. Must be called on a
    /// non-terminal position; the returned move is `Some` whenever it is.
    pub fn search(self, board: &mut Board) -> (f32, Option<Move>) {
        match self {
            Strategy::Minimax => minimax::minimax(board),
            Strategy::Negamax => negamax::negamax(board),
            Strategy::AlphaBeta => alphabeta::alphabeta(board),
        }
    }
}
