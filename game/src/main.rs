//! term2048 terminal entry point.
//!
//! Run: cargo run --bin term2048 -- --help

use std::error::Error;

use clap::Parser;
use g2048_term::{CrosstermDriver, CrosstermInput};
use term2048::{Args, app, logging};

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &args.log_file {
        logging::init(path, args.log_level)?;
    }

    let config = args.game_config();
    let mut session = config.session()?;
    log::info!(
        "starting a {n}x{n} game (seed {:?})",
        config.seed,
        n = config.size
    );

    let mut input = CrosstermInput::spawn()?;
    let mut driver = CrosstermDriver::new();
    app::run(&mut session, &mut driver, &mut input)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("fatal: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
