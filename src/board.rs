use std::fmt;
use thiserror::Error;

/// Cardinal square numbering: 1 at the top left through 9 at the bottom
/// right, row-major. Internally squares are indexed `mv - 1`.
pub type Move = usize;

pub const SQUARES: usize = 9;

// 3 rows, 3 columns, 2 diagonals
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// +1 for X, -1 for O. A line sums to exactly +/-3 under this encoding
    /// only when one player holds all three squares.
    fn mark(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("square {0} is out of range, play 1-9")]
    OutOfRange(Move),
    #[error("square {0} is already occupied")]
    Occupied(Move),
}

/// The one mutable board. A single instance is created empty at startup and
/// mutated in place for the whole game and for every recursive search call;
/// searchers borrow it and must leave it exactly as they found it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; SQUARES],
    to_move: Player,
    ply: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self { cells: [None; SQUARES], to_move: Player::X, ply: 0 }
    }

    /// Replay a move list from the empty board, validating each move.
    pub fn from_moves(moves: &[Move]) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for &mv in moves {
            board.try_apply(mv)?;
        }
        Ok(board)
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Full-move counter for display: a half-move in progress counts as a
    /// whole move, so plies 1 and 2 are both "Move: 1".
    pub fn move_number(&self) -> u32 {
        (self.ply + 1) / 2
    }

    pub fn first_player_to_move(&self) -> bool {
        self.to_move == Player::X
    }

    /// All empty squares in row-major order. Does not mutate.
    pub fn available_moves(&self) -> Vec<Move> {
        (1..=SQUARES).filter(|&mv| self.cells[mv - 1].is_none()).collect()
    }

    /// Write the current mover's mark into `mv`, bump the ply, flip the turn.
    /// Precondition: the square is empty. Not checked on this hot path; the
    /// searchers only ever apply moves drawn from `available_moves`, and
    /// external input goes through `try_apply`.
    pub fn apply(&mut self, mv: Move) {
        debug_assert!(self.cells[mv - 1].is_none(), "apply on occupied square {mv}");
        self.cells[mv - 1] = Some(self.to_move);
        self.ply += 1;
        self.to_move = self.to_move.other();
    }

    /// Exact inverse of `apply` for the same move. Every `apply` must be
    /// paired with an `undo` in strict LIFO order on every path, pruning
    /// cutoffs included; undoing anything else is a contract violation.
    pub fn undo(&mut self, mv: Move) {
        self.cells[mv - 1] = None;
        self.ply -= 1;
        self.to_move = self.to_move.other();
    }

    /// Checked variant of `apply` for human-sourced moves.
    pub fn try_apply(&mut self, mv: Move) -> Result<(), MoveError> {
        if !(1..=SQUARES).contains(&mv) {
            return Err(MoveError::OutOfRange(mv));
        }
        if self.cells[mv - 1].is_some() {
            return Err(MoveError::Occupied(mv));
        }
        self.apply(mv);
        Ok(())
    }

    /// Scan the 8 lines for a clean sweep. `Some(p)` carries both halves of
    /// the terminal answer: the game is won, and by whom.
    pub fn winner(&self) -> Option<Player> {
        for line in LINES {
            let sum: i8 = line.iter().map(|&i| self.cells[i].map_or(0, Player::mark)).sum();
            if sum == 3 {
                return Some(Player::X);
            }
            if sum == -3 {
                return Some(Player::O);
            }
        }
        None
    }

    pub fn is_drawn(&self) -> bool {
        self.cells.iter().all(Option::is_some) && self.winner().is_none()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            let glyph = |col: usize| self.cells[3 * row + col].map_or(' ', Player::glyph);
            writeln!(f, "{}|{}|{}", glyph(0), glyph(1), glyph(2))?;
        }
        Ok(())
    }
}
