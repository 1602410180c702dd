//! File logging. The alternate screen hides stderr, so log records go to a
//! file named on the command line.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Install a logger that writes records at `level` or above to `path`,
/// truncating it.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file)?;
    log::info!("logging to {} at {level}", path.display());
    Ok(())
}
