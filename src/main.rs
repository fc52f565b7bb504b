use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use tictactoe::computer::RandomComputer;
use tictactoe::driver::GameLoop;
use tictactoe::human::Human;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let player = Human::new(io::stdin().lock(), io::stdout());
    let computer = RandomComputer::new(StdRng::from_entropy(), io::stdout());

    let mut game = GameLoop::new(player, computer, io::stdout());
    game.run()?;

    Ok(())
}
