//! Single-player Snake on a fixed square board.
//!
//! The simulation lives in [`game::GameState`]; everything under
//! [`renderer`], [`ui`], [`input::InputHandler`] and [`terminal_runtime`]
//! is the terminal front end driving it.

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
