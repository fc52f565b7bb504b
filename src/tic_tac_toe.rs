use std::fmt;
use anyhow::{Result, bail};

pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The human player.
    X,
    /// The computer.
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled(Mark),
}

/// The 3x3 grid. This is the only mutable state of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        row < SIZE && col < SIZE && self.cells[row][col] == Cell::Empty
    }

    // Write a mark into an empty cell
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<()> {
        if row >= SIZE || col >= SIZE {
            bail!("Cell ({}, {}) is off the board", row, col);
        }
        match self.cells[row][col] {
            Cell::Empty => {
                self.cells[row][col] = Cell::Filled(mark);
                Ok(())
            },
            Cell::Filled(_) => bail!("Cell ({}, {}) is already filled", row, col),
        }
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col] == Cell::Empty)
            .collect()
    }

    pub fn check_win(&self) -> bool {
        self.winner().is_some()
    }

    // Rows first, then columns, then the two diagonals
    pub fn winner(&self) -> Option<Mark> {
        for row in 0..SIZE {
            if let Some(mark) = self.line([(row, 0), (row, 1), (row, 2)]) {
                return Some(mark);
            }
        }

        for col in 0..SIZE {
            if let Some(mark) = self.line([(0, col), (1, col), (2, col)]) {
                return Some(mark);
            }
        }

        self.line([(0, 0), (1, 1), (2, 2)])
            .or_else(|| self.line([(0, 2), (1, 1), (2, 0)]))
    }

    pub fn check_draw(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    fn line(&self, coords: [(usize, usize); SIZE]) -> Option<Mark> {
        let [first, rest @ ..] = coords;
        match self.cells[first.0][first.1] {
            Cell::Filled(mark) if rest.iter().all(|&(r, c)| self.cells[r][c] == Cell::Filled(mark)) => Some(mark),
            _ => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  1 2 3")?;
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", i + 1)?;
            for (j, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => " ",
                    Cell::Filled(Mark::X) => "X",
                    Cell::Filled(Mark::O) => "O",
                };
                write!(f, "{}", symbol)?;
                if j < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if i < SIZE - 1 {
                writeln!(f, "  -----")?;
            }
        }
        Ok(())
    }
}
