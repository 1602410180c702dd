//! The run loop: check, render, then wait for an event that changes
//! something.

use g2048_core::{GameSession, Outcome};
use g2048_term::{Driver, Grid, InputSource, TermError, compute_frame};

use crate::keymap;
use crate::view;

/// Front and back screen buffers. Only the difference reaches the driver.
#[derive(Debug)]
struct Screen {
    shown: Grid,
    next: Grid,
}

impl Screen {
    fn new() -> Self {
        Self {
            shown: Grid::new(0, 0),
            next: Grid::new(0, 0),
        }
    }

    fn render<D: Driver>(&mut self, driver: &mut D, session: &GameSession) -> Result<(), TermError> {
        let (w, h) = driver.size()?;
        let (w, h) = (i32::from(w), i32::from(h));
        if self.next.width() != w || self.next.height() != h {
            self.next.resize(w, h);
        }
        view::draw(&mut self.next, session);
        let frame = compute_frame(&self.shown, &self.next);
        if !frame.is_empty() {
            driver.flush(&frame)?;
        }
        self.shown.clone_from(&self.next);
        Ok(())
    }
}

/// Play until the player quits or the terminal fails.
///
/// The driver is initialised first and closed on every exit path.
pub fn run<D: Driver, I: InputSource>(
    session: &mut GameSession,
    driver: &mut D,
    input: &mut I,
) -> Result<(), TermError> {
    driver.init()?;
    let result = play(session, driver, input);
    driver.close();
    result
}

fn play<D: Driver, I: InputSource>(
    session: &mut GameSession,
    driver: &mut D,
    input: &mut I,
) -> Result<(), TermError> {
    let mut screen = Screen::new();
    loop {
        session.check();
        screen.render(driver, session)?;

        loop {
            let msg = input.next_msg()?;
            let Some(event) = keymap::event_for(&msg) else {
                continue;
            };
            match session.handle(event) {
                Outcome::Advance | Outcome::Restarted => break,
                Outcome::Ignored => {}
                Outcome::Redraw => screen.render(driver, session)?,
                Outcome::Quit => {
                    log::info!(
                        "quit with score {} after {} moves",
                        session.score(),
                        session.step()
                    );
                    return Ok(());
                }
            }
        }
    }
}
