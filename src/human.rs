use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use crate::game::Player;
use crate::tic_tac_toe::{Board, Mark, SIZE};

pub const PROMPT: &str = "Enter your move (row and column): ";
pub const INVALID: &str = "Invalid move. Try again.";

/// Reads moves as 1-based `row col` pairs, re-prompting until one is valid.
///
/// The two numbers are whitespace-separated tokens and may span lines. Tokens left
/// over on a line are kept for the next move.
pub struct Human<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Human<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = self.input.read_line(&mut line).context("failed to read move")?;
            if read == 0 {
                bail!("input closed while waiting for a move");
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn read_coords(&mut self) -> Result<Option<(usize, usize)>> {
        let row = self.next_token()?;
        let col = self.next_token()?;
        Ok(parse_coords(&row, &col))
    }
}

// Anything that is not two integers in 1..=3 maps to None
fn parse_coords(row: &str, col: &str) -> Option<(usize, usize)> {
    let row = row.parse::<usize>().ok()?.checked_sub(1)?;
    let col = col.parse::<usize>().ok()?.checked_sub(1)?;
    (row < SIZE && col < SIZE).then_some((row, col))
}

impl<R: BufRead, W: Write> Player for Human<R, W> {
    fn mark(&self) -> Mark {
        Mark::X
    }

    fn play(&mut self, board: &mut Board) -> Result<(usize, usize)> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            match self.read_coords()? {
                Some((row, col)) if board.is_empty_at(row, col) => {
                    board.place(row, col, Mark::X)?;
                    log::debug!("player placed X at ({}, {})", row, col);
                    return Ok((row, col));
                },
                coords => {
                    log::debug!("rejected player move {:?}", coords);
                    writeln!(self.output, "{}", INVALID)?;
                },
            }
        }
    }
}
