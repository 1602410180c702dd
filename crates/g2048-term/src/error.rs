//! Terminal-layer errors.

use std::io;

use thiserror::Error;

/// A failure of the terminal backend. None of these are recoverable; the
/// caller restores the terminal and exits.
#[derive(Debug, Error)]
pub enum TermError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("the input worker stopped")]
    InputClosed,
}
