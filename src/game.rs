use crate::tic_tac_toe::{Board, Mark};

/// One side of the game: something that picks a cell and writes its mark.
pub trait Player {
    fn mark(&self) -> Mark;

    /// Place exactly one mark on `board` and return the 0-based cell it went into.
    /// Only called while the board still has an empty cell.
    fn play(&mut self, board: &mut Board) -> anyhow::Result<(usize, usize)>;
}
