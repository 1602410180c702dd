//! Paints a [`GameSession`] into a screen [`Grid`].
//!
//! The board is centred on the screen with three header lines above it.
//! Each board cell is two rows tall and wide enough for the largest tile.

use g2048_core::{GameSession, Status};
use g2048_term::{Cell, Grid, Style};

use crate::colors;

const HEADER_LINES: i32 = 3;

/// Columns taken by one board cell, its left border included.
fn cell_width(max_tile: u32) -> i32 {
    (max_tile.to_string().len() as i32).max(4) + 1
}

/// Redraw the whole screen for the current session state.
pub fn draw(grid: &mut Grid, session: &GameSession) {
    grid.fill(Cell::default());

    let board = session.board();
    let n = board.size() as i32;
    let cw = cell_width(board.max_tile());
    let ox = (grid.width() - (cw * n + 1)) / 2;
    let oy = (grid.height() - (2 * n + 1) + HEADER_LINES) / 2;

    grid.print(ox, oy - 3, " PLAY with ARROW KEY", colors::HEADER);
    grid.print(ox, oy - 2, "ESC:exit Enter:replay", colors::HEADER);
    let score = format!("SCORE: {}  BEST: {}", session.score(), session.best());
    grid.print(ox, oy - 1, &score, colors::HEADER);

    draw_frame(grid, ox, oy, n, cw);

    for (row, values) in board.rows().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let text = value.to_string();
            let pad = (cw - 1 - text.len() as i32) / 2;
            let x = ox + col as i32 * cw + 1 + pad;
            let y = oy + row as i32 * 2 + 1;
            grid.print(x, y, &text, colors::tile_style(value));
        }
    }

    match session.status() {
        Some(Status::Win) => overlay(grid, "Win!!", colors::WIN_OVERLAY),
        Some(Status::Lose) => overlay(grid, "Lose!!", colors::LOSE_OVERLAY),
        Some(Status::Spawned) | None => {}
    }
}

fn draw_frame(grid: &mut Grid, ox: i32, oy: i32, n: i32, cw: i32) {
    for i in 0..=n {
        let y = oy + i * 2;
        for x in 0..=cw * n {
            let ch = if x % cw == 0 { '+' } else { '-' };
            grid.set(ox + x, y, Cell::new(ch, colors::FRAME));
        }
        if i < n {
            for col in 0..=n {
                grid.set(ox + col * cw, y + 1, Cell::new('|', colors::FRAME));
            }
        }
    }
}

fn overlay(grid: &mut Grid, text: &str, style: Style) {
    let x = (grid.width() - text.len() as i32) / 2;
    grid.print(x, grid.height() / 2, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use g2048_core::Board;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session(rows: &[[u32; 4]]) -> GameSession {
        GameSession::from_board(Board::from_rows(rows).unwrap(), SmallRng::seed_from_u64(5))
    }

    fn screen_text(grid: &Grid) -> String {
        let mut text = String::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                text.push(grid.at(x, y).ch);
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn board_and_score_are_drawn() {
        let s = session(&[[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 1024]]);
        let mut grid = Grid::new(40, 20);
        draw(&mut grid, &s);
        let text = screen_text(&grid);

        assert!(text.contains("SCORE: 0  BEST: 0"));
        assert!(text.contains("1024"));
        assert!(!text.contains("Win!!"));

        // 21×9 board centred on 40×20 with the header above it.
        assert_eq!(grid.at(9, 7).ch, '+');
        assert_eq!(grid.at(9, 7).style, colors::FRAME);
        assert_eq!(grid.at(10, 7).ch, '-');
        assert_eq!(grid.at(9, 8).ch, '|');
        assert_eq!(grid.at(11, 8).ch, '2');
        assert_eq!(grid.at(11, 8).style, colors::tile_style(2));
    }

    #[test]
    fn win_overlay() {
        let mut s = session(&[[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        s.check();
        let mut grid = Grid::new(40, 20);
        draw(&mut grid, &s);
        assert!(screen_text(&grid).contains("Win!!"));
        assert_eq!(grid.at(17, 10).style, colors::WIN_OVERLAY);
    }

    #[test]
    fn lose_overlay() {
        let mut s = session(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        s.check();
        let mut grid = Grid::new(40, 20);
        draw(&mut grid, &s);
        assert!(screen_text(&grid).contains("Lose!!"));
    }

    #[test]
    fn wide_tiles_widen_cells() {
        assert_eq!(cell_width(2), 5);
        assert_eq!(cell_width(2048), 5);
        assert_eq!(cell_width(16384), 6);
    }

    #[test]
    fn tiny_screen_clips() {
        let s = session(&[[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
        let mut grid = Grid::new(6, 3);
        draw(&mut grid, &s);
        assert_eq!(grid.width(), 6);
    }
}
