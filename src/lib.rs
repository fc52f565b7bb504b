pub mod tic_tac_toe;
pub mod game;
pub mod human;
pub mod computer;
pub mod driver;
pub mod cipher;
