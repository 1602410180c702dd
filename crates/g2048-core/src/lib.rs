//! **g2048-core**: the board engine behind term2048.
//!
//! A [`Board`] is a square grid of power-of-two tiles. It knows how to slide
//! and merge toward one edge, and how to either declare the game over or
//! spawn the next tile. A [`GameSession`] adds the score, the move counter
//! and the event decision table the terminal front end runs on.

pub mod board;
pub mod direction;
pub mod error;
pub mod session;

pub use board::{Board, MoveResult, Status, WIN_TILE};
pub use direction::Direction;
pub use error::BoardError;
pub use session::{Event, GameSession, Outcome};
