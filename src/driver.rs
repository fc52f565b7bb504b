use std::io::Write;

use anyhow::Result;

use crate::game::Player;
use crate::tic_tac_toe::{Board, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    PlayerTurn,
    ComputerTurn,
    Won(Mark),
    Drawn,
}

impl State {
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Won(_) | State::Drawn)
    }
}

/// Alternates the two sides on one board until somebody wins or the board fills up.
pub struct GameLoop<P, C, W> {
    board: Board,
    state: State,
    player: P,
    computer: C,
    output: W,
}

impl<P: Player, C: Player, W: Write> GameLoop<P, C, W> {
    pub fn new(player: P, computer: C, output: W) -> Self {
        Self {
            board: Board::new(),
            state: State::PlayerTurn,
            player,
            computer,
            output,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Advance by one transition. A no-op once the game is over.
    pub fn step(&mut self) -> Result<State> {
        let (mover, next) = match self.state {
            State::PlayerTurn => {
                writeln!(self.output, "{}", self.board)?;
                self.player.play(&mut self.board)?;
                (self.player.mark(), State::ComputerTurn)
            },
            State::ComputerTurn => {
                self.computer.play(&mut self.board)?;
                (self.computer.mark(), State::PlayerTurn)
            },
            terminal => return Ok(terminal),
        };

        // a draw only counts when the last move did not also win
        self.state = if self.board.check_win() {
            State::Won(mover)
        } else if self.board.check_draw() {
            State::Drawn
        } else {
            next
        };
        log::debug!("{:?} moved, now {:?}", mover, self.state);

        if self.state.is_terminal() {
            self.finish()?;
        }
        Ok(self.state)
    }

    pub fn run(&mut self) -> Result<State> {
        log::info!("starting a new game");
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.state)
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.board)?;
        let message = match self.state {
            State::Won(Mark::X) => "You win!",
            State::Won(Mark::O) => "Computer wins!",
            _ => "It's a draw!",
        };
        writeln!(self.output, "{}", message)?;
        log::info!("game over: {:?}", self.state);
        Ok(())
    }
}
