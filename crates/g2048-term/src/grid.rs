//! The screen buffer [`Grid`] and the [`Frame`] diff sent to a driver.
//!
//! Drawing code paints a whole `Grid` every time; [`compute_frame`] then
//! keeps only the cells that differ from what is already on screen.

use crate::style::{Cell, Style};

/// A `width`×`height` buffer of cells. Writes outside the bounds are
/// dropped, so callers may draw partly off-screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    /// The cell at (`x`, `y`), or a blank cell outside the grid.
    pub fn at(&self, x: i32, y: i32) -> Cell {
        self.index(x, y)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `text` left to right from (`x`, `y`). Returns the number of
    /// characters that landed inside the grid.
    pub fn print(&mut self, x: i32, y: i32, text: &str, style: Style) -> usize {
        let mut written = 0;
        for (dx, ch) in text.chars().enumerate() {
            let cx = x + dx as i32;
            if let Some(i) = self.index(cx, y) {
                self.cells[i] = Cell::new(ch, style);
                written += 1;
            }
        }
        written
    }

    /// Change the size and blank every cell.
    pub fn resize(&mut self, width: i32, height: i32) {
        *self = Self::new(width, height);
    }
}

/// A cell that must be written at (`x`, `y`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub x: i32,
    pub y: i32,
    pub cell: Cell,
}

/// The changes between two screens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
    /// The screen must be wiped before `cells` are written.
    pub clear: bool,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && !self.clear
    }
}

/// Diff `curr` against `prev`. A size change yields a full, clearing frame.
pub fn compute_frame(prev: &Grid, curr: &Grid) -> Frame {
    let resized = prev.width != curr.width || prev.height != curr.height;
    let mut cells = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let cell = curr.at(x, y);
            if resized || prev.at(x, y) != cell {
                cells.push(FrameCell { x, y, cell });
            }
        }
    }
    Frame {
        cells,
        width: curr.width,
        height: curr.height,
        clear: resized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut g = Grid::new(3, 2);
        g.set(5, 5, Cell::new('x', Style::default()));
        g.set(-1, 0, Cell::new('x', Style::default()));
        assert_eq!(g.at(5, 5), Cell::default());
        assert!(g.cells.iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn print_clips() {
        let mut g = Grid::new(4, 1);
        let style = Style::new(Color::from_rgb(1, 2, 3), Color::DEFAULT);
        assert_eq!(g.print(-1, 0, "Win!!", style), 4);
        assert_eq!(g.at(0, 0).ch, 'i');
        assert_eq!(g.at(3, 0).ch, '!');
        assert_eq!(g.at(0, 0).style, style);
        assert_eq!(g.print(0, 1, "below", style), 0);
    }

    #[test]
    fn frame_has_only_changes() {
        let prev = Grid::new(3, 2);
        let mut curr = prev.clone();
        curr.set(1, 1, Cell::new('2', Style::default()));
        let frame = compute_frame(&prev, &curr);
        assert!(!frame.clear);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!((frame.cells[0].x, frame.cells[0].y), (1, 1));
        assert!(compute_frame(&curr, &curr).is_empty());
    }

    #[test]
    fn resize_redraws_everything() {
        let prev = Grid::new(3, 2);
        let mut curr = prev.clone();
        curr.resize(2, 2);
        let frame = compute_frame(&prev, &curr);
        assert!(frame.clear);
        assert_eq!(frame.cells.len(), 4);
        assert_eq!((frame.width, frame.height), (2, 2));
    }
}
