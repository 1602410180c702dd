//! A single game in progress and the decision table that drives it.
//!
//! The session owns the board along with the score and the move counter. The
//! run loop feeds it [`Event`]s and acts on the returned [`Outcome`].

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::board::{Board, Status};
use crate::direction::Direction;
use crate::error::BoardError;

/// An abstract input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    Move(Direction),
    Restart,
    Quit,
    /// The screen changed size. Never touches the board.
    Resize,
}

/// What the run loop should do after [`GameSession::handle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A move was accepted: check, spawn and render again.
    Advance,
    /// A move changed nothing: wait for the next event without rendering.
    Ignored,
    /// The game was reset: check, spawn and render again.
    Restarted,
    /// Re-render the current state, then wait for the next event.
    Redraw,
    /// Stop the loop.
    Quit,
}

/// Board, score and move counter of the game being played.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    score: u64,
    best: u64,
    step: u64,
    status: Option<Status>,
    rng: SmallRng,
}

impl GameSession {
    /// A fresh game on an empty `size`×`size` board.
    pub fn new(size: usize, rng: SmallRng) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(size)?, rng))
    }

    /// A fresh game seeded from the operating system.
    pub fn from_entropy(size: usize) -> Result<Self, BoardError> {
        Self::new(size, SmallRng::from_os_rng())
    }

    /// A game that starts from an existing position with zero score.
    pub fn from_board(board: Board, rng: SmallRng) -> Self {
        Self {
            board,
            score: 0,
            best: 0,
            step: 0,
            status: None,
            rng,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Highest score seen since the process started.
    #[inline]
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Accepted moves since the game started.
    #[inline]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Result of the most recent [`check`](Self::check), if any since the
    /// last reset.
    #[inline]
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Run the post-move check: win, spawn a tile, or lose.
    pub fn check(&mut self) -> Status {
        let status = self.board.check_win_or_spawn(&mut self.rng);
        match status {
            Status::Spawned => log::trace!("spawned a tile, {} on board", self.board.tile_count()),
            Status::Win | Status::Lose if self.status != Some(status) => {
                log::info!(
                    "game over ({status:?}) after {} moves, score {}, best tile {}",
                    self.step,
                    self.score,
                    self.board.max_tile()
                );
            }
            _ => {}
        }
        self.status = Some(status);
        status
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::Move(direction) => {
                let result = self.board.slide(direction, self.step);
                if !result.changed {
                    log::trace!("move {direction} changed nothing");
                    return Outcome::Ignored;
                }
                self.score += result.gained;
                self.best = self.best.max(self.score);
                self.step += 1;
                log::debug!(
                    "move {direction}: +{} (score {}, step {})",
                    result.gained,
                    self.score,
                    self.step
                );
                Outcome::Advance
            }
            Event::Restart => {
                log::info!("restart at score {}", self.score);
                self.reset();
                Outcome::Restarted
            }
            Event::Quit => Outcome::Quit,
            Event::Resize => Outcome::Redraw,
        }
    }

    /// Empty the board and zero the score and move counter. `best` survives.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.step = 0;
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn session(rows: &[[u32; 4]]) -> GameSession {
        GameSession::from_board(Board::from_rows(rows).unwrap(), rng())
    }

    #[test]
    fn empty_board_to_first_merge() {
        let mut s = GameSession::new(4, rng()).unwrap();
        assert_eq!(s.board().tile_count(), 0);
        assert_eq!(s.check(), Status::Spawned);
        assert_eq!(s.check(), Status::Spawned);
        assert_eq!(s.board().tile_count(), 2);

        let mut s = session(&[[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(s.handle(Event::Move(Direction::Left)), Outcome::Advance);
        assert_eq!(s.board().rows().next().unwrap(), &[4, 0, 0, 0]);
        assert_eq!(s.step(), 1);

        // Nothing can move left any more. The board still has room, so the
        // column-full clause does not apply and the move is rejected: no
        // turn is used and no tile will be spawned. Only a completely full
        // board turns an unmoved slide into an accepted move.
        let before = s.board().clone();
        assert_eq!(s.handle(Event::Move(Direction::Left)), Outcome::Ignored);
        assert_eq!(s.board(), &before);
        assert_eq!(s.step(), 1);
    }

    #[test]
    fn score_is_scaled_by_accepted_moves() {
        let mut s = session(&[[2, 2, 0, 0], [0; 4], [4, 4, 0, 0], [0; 4]]);
        // First accepted move: step is still 0.
        assert_eq!(s.handle(Event::Move(Direction::Left)), Outcome::Advance);
        assert_eq!(s.score(), 0);

        // Rejected moves leave the multiplier alone.
        assert_eq!(s.handle(Event::Move(Direction::Left)), Outcome::Ignored);
        assert_eq!(s.step(), 1);

        // [4, 0, 0, 0] over [8, 0, 0, 0]: nothing merges going up, but the
        // tiles shift.
        assert_eq!(s.handle(Event::Move(Direction::Up)), Outcome::Advance);
        assert_eq!(s.score(), 0);
        assert_eq!(s.step(), 2);

        let mut s = session(&[[2, 2, 8, 8], [0; 4], [0; 4], [0; 4]]);
        s.handle(Event::Move(Direction::Down));
        s.handle(Event::Move(Direction::Up));
        s.handle(Event::Move(Direction::Right));
        // Third accepted move merges 2+2 and 8+8 with multiplier 2.
        assert_eq!(s.score(), (4 + 16) * 2);
        assert_eq!(s.best(), s.score());
    }

    #[test]
    fn restart_resets_everything_but_best() {
        let mut s = session(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        s.handle(Event::Move(Direction::Down));
        s.handle(Event::Move(Direction::Left));
        assert_eq!(s.score(), 4);
        s.check();

        assert_eq!(s.handle(Event::Restart), Outcome::Restarted);
        assert_eq!(s.score(), 0);
        assert_eq!(s.step(), 0);
        assert_eq!(s.best(), 4);
        assert_eq!(s.board().tile_count(), 0);
        assert_eq!(s.status(), None);
    }

    #[test]
    fn resize_and_quit_do_not_touch_the_board() {
        let mut s = session(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = s.board().clone();
        assert_eq!(s.handle(Event::Resize), Outcome::Redraw);
        assert_eq!(s.handle(Event::Quit), Outcome::Quit);
        assert_eq!(s.board(), &before);
        assert_eq!(s.step(), 0);
    }

    #[test]
    fn jammed_board_reaches_lose() {
        let mut s = session(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert_eq!(s.handle(Event::Move(Direction::Up)), Outcome::Advance);
        assert_eq!(s.check(), Status::Lose);
        assert_eq!(s.status(), Some(Status::Lose));
    }

    #[test]
    fn win_persists_while_playing_on() {
        let mut s = session(&[[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(s.handle(Event::Move(Direction::Left)), Outcome::Advance);
        assert_eq!(s.check(), Status::Win);
        assert_eq!(s.board().tile_count(), 1);
        assert_eq!(s.handle(Event::Move(Direction::Right)), Outcome::Advance);
        assert_eq!(s.check(), Status::Win);
    }
}
