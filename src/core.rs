pub mod config;
pub mod definitions;
pub mod engine;
pub mod game;
pub mod grid;
pub mod interaction;
pub mod pieces;
pub mod turn;
