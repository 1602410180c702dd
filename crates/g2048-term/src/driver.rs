//! The two seams between the game and a terminal: [`Driver`] paints,
//! [`InputSource`] produces messages.

use crate::error::TermError;
use crate::grid::Frame;
use crate::messages::Msg;

/// A display backend.
pub trait Driver {
    /// Prepare the screen. Called once before the first flush.
    fn init(&mut self) -> Result<(), TermError>;

    /// Current screen size as `(width, height)` in cells.
    fn size(&self) -> Result<(u16, u16), TermError>;

    /// Write the changed cells of a frame and make them visible.
    fn flush(&mut self, frame: &Frame) -> Result<(), TermError>;

    /// Restore the screen. Must be safe to call more than once.
    fn close(&mut self);
}

/// A blocking source of input messages.
pub trait InputSource {
    /// Wait for the next message. There is no timeout; the game stops only
    /// on an explicit quit.
    fn next_msg(&mut self) -> Result<Msg, TermError>;
}
