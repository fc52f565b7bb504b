use std::io::Write;

use anyhow::{Result, bail};
use rand::Rng;

use crate::game::Player;
use crate::tic_tac_toe::{Board, Mark, SIZE};

pub const ANNOUNCE: &str = "Computer's move:";

/// Plays `O` on a uniformly random empty cell by rejection sampling.
pub struct RandomComputer<G, W> {
    rng: G,
    output: W,
}

impl<G: Rng, W: Write> RandomComputer<G, W> {
    pub fn new(rng: G, output: W) -> Self {
        Self { rng, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn sample(&mut self) -> (usize, usize) {
        (self.rng.gen_range(0..SIZE), self.rng.gen_range(0..SIZE))
    }
}

impl<G: Rng, W: Write> Player for RandomComputer<G, W> {
    fn mark(&self) -> Mark {
        Mark::O
    }

    fn play(&mut self, board: &mut Board) -> Result<(usize, usize)> {
        if board.check_draw() {
            bail!("no empty cell left for the computer");
        }
        writeln!(self.output, "{}", ANNOUNCE)?;

        let mut attempts = 0;
        loop {
            let (row, col) = self.sample();
            attempts += 1;
            if board.is_empty_at(row, col) {
                board.place(row, col, Mark::O)?;
                log::debug!("computer placed O at ({}, {}) after {} samples", row, col, attempts);
                return Ok((row, col));
            }
        }
    }
}
