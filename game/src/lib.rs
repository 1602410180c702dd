//! term2048: the 2048 sliding-tile puzzle in a terminal.
//!
//! [`app::run`] drives a [`g2048_core::GameSession`] with any
//! [`g2048_term::Driver`] and [`g2048_term::InputSource`]; the binary plugs in
//! the crossterm backend.

pub mod app;
pub mod colors;
pub mod config;
pub mod keymap;
pub mod logging;
pub mod view;

pub use config::{Args, GameConfig};
