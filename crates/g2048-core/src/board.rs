//! The [`Board`]: an N×N grid of tiles and the slide-and-merge primitive.
//!
//! Only [`Board::merge_up`] knows how tiles combine. The other three
//! directions rotate the grid so that the wanted direction points up, merge,
//! and rotate back.

use std::fmt;

use rand::Rng;

use crate::direction::Direction;
use crate::error::BoardError;

/// Any tile at or above this value wins the game.
pub const WIN_TILE: u32 = 2048;

/// Result of the post-move check, in priority order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Some tile reached [`WIN_TILE`]. The board was not touched.
    Win,
    /// No empty cell was left for a new tile.
    Lose,
    /// A 2 or a 4 was placed in an empty cell.
    Spawned,
}

/// What a single slide did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveResult {
    /// Whether the move counts as a turn. See [`Board::merge_up`].
    pub changed: bool,
    /// Sum of `merged value × step` over every merge of this move.
    pub gained: u64,
}

#[inline]
fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// A square grid of tiles, stored row-major. `0` is an empty cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Side length of the classic game.
    pub const DEFAULT_SIZE: usize = 4;

    /// An empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a board from explicit rows, top row first.
    ///
    /// Every row must be as long as there are rows, and every value must be
    /// `0` or a power of two of at least 2.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
                cells.push(value);
            }
        }
        Ok(Self { size, cells })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// The value at (`row`, `col`), or `None` outside the board.
    pub fn at(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.size && col < self.size {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Overwrite one cell. No-op outside the board.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(is_valid_tile(value), "invalid tile value {value}");
        if row < self.size && col < self.size {
            let i = self.index(row, col);
            self.cells[i] = value;
        }
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Sum of every tile. Slides never change it.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile on the board, `0` when empty.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Whether every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    // -------------------------------------------------------------------
    // Rotations
    // -------------------------------------------------------------------

    /// Move every value to the cell `to(size, row, col)` names.
    fn remap(&mut self, to: impl Fn(usize, usize, usize) -> (usize, usize)) {
        let n = self.size;
        let mut next = vec![0; self.cells.len()];
        for row in 0..n {
            for col in 0..n {
                let (r, c) = to(n, row, col);
                next[r * n + c] = self.cells[row * n + col];
            }
        }
        self.cells = next;
    }

    /// Rotate 90° clockwise: the left column becomes the top row.
    pub fn rotate_right(&mut self) {
        self.remap(|n, row, col| (col, n - row - 1));
    }

    /// Rotate 90° counter-clockwise: the top row becomes the left column.
    pub fn rotate_left(&mut self) {
        self.remap(|n, row, col| (n - col - 1, row));
    }

    /// Rotate 180°.
    pub fn rotate_180(&mut self) {
        self.remap(|n, row, col| (n - row - 1, n - col - 1));
    }

    // -------------------------------------------------------------------
    // Moves
    // -------------------------------------------------------------------

    /// Slide every column toward the top edge, merging equal neighbours.
    ///
    /// Each column is compacted, then scanned top to bottom: two adjacent
    /// equal tiles become one tile of double value and the scan skips past
    /// both, so `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`. Each merge adds
    /// `doubled × step` to [`MoveResult::gained`].
    ///
    /// `changed` is set when a tile moved or merged, and also whenever every
    /// column is already full. The second case lets a jammed board still
    /// consume a turn, so the following check can report [`Status::Lose`].
    pub fn merge_up(&mut self, step: u64) -> MoveResult {
        let n = self.size;
        let mut changed = false;
        let mut has_room = false;
        let mut gained = 0u64;

        for col in 0..n {
            let mut packed = Vec::with_capacity(n);
            for row in 0..n {
                let value = self.cells[self.index(row, col)];
                if value != 0 {
                    if row != packed.len() {
                        changed = true;
                    }
                    packed.push(value);
                }
            }
            if packed.len() < n {
                has_room = true;
            }

            let mut merged = Vec::with_capacity(n);
            let mut i = 0;
            while i < packed.len() {
                if i + 1 < packed.len() && packed[i] == packed[i + 1] {
                    let doubled = packed[i] * 2;
                    gained += u64::from(doubled) * step;
                    merged.push(doubled);
                    changed = true;
                    i += 2;
                } else {
                    merged.push(packed[i]);
                    i += 1;
                }
            }
            merged.resize(n, 0);

            for (row, value) in merged.into_iter().enumerate() {
                let idx = self.index(row, col);
                self.cells[idx] = value;
            }
        }

        MoveResult {
            changed: changed || !has_room,
            gained,
        }
    }

    /// Slide toward `direction`; `step` is the number of moves accepted so
    /// far and scales the score of every merge.
    pub fn slide(&mut self, direction: Direction, step: u64) -> MoveResult {
        match direction {
            Direction::Up => self.merge_up(step),
            Direction::Down => {
                self.rotate_180();
                let result = self.merge_up(step);
                self.rotate_180();
                result
            }
            Direction::Left => {
                self.rotate_right();
                let result = self.merge_up(step);
                self.rotate_left();
                result
            }
            Direction::Right => {
                self.rotate_left();
                let result = self.merge_up(step);
                self.rotate_right();
                result
            }
        }
    }

    /// Report a win, or place a new tile, or report a loss.
    ///
    /// A random start cell is picked and the board is scanned row-major from
    /// there, wrapping around, until an empty cell is found. It receives a 2
    /// or a 4 with equal probability.
    pub fn check_win_or_spawn<R: Rng>(&mut self, rng: &mut R) -> Status {
        if self.max_tile() >= WIN_TILE {
            return Status::Win;
        }

        let n = self.size;
        let total = n * n;
        let start = rng.random_range(0..n) * n + rng.random_range(0..n);
        for offset in 0..total {
            let i = (start + offset) % total;
            if self.cells[i] == 0 {
                self.cells[i] = 2 << u32::from(rng.random::<bool>());
                return Status::Spawned;
            }
        }
        Status::Lose
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            cells: vec![0; Self::DEFAULT_SIZE * Self::DEFAULT_SIZE],
        }
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<u32>> {
    fn from(board: Board) -> Self {
        board.rows().map(<[u32]>::to_vec).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().to_string().len();
        for row in self.rows() {
            for (col, &value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
