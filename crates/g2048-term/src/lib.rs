//! **g2048-term**: the terminal side of term2048.
//!
//! A screen-buffer [`Grid`] of styled [`Cell`]s, frame diffing, the
//! [`Driver`] / [`InputSource`] seams, and their crossterm implementations.

pub mod backend;
pub mod driver;
pub mod error;
pub mod grid;
pub mod messages;
pub mod style;

pub use backend::{CrosstermDriver, CrosstermInput};
pub use driver::{Driver, InputSource};
pub use error::TermError;
pub use grid::{Frame, FrameCell, Grid, compute_frame};
pub use messages::{Key, ModMask, Msg};
pub use style::{AttrMask, Cell, Color, Style};
