// Exhaustive tic-tac-toe engine: a mutable board plus three interchangeable searchers
pub mod board;
pub mod search;
