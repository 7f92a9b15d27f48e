pub mod game;
pub mod runner;
pub mod types;
