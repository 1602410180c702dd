//! Palette for the board, its frame and the overlays.

use g2048_term::{AttrMask, Color, Style};

pub const BG: Color = Color::DEFAULT;

pub const BLACK: Color = Color::from_rgb(20, 20, 20);
pub const YELLOW: Color = Color::from_rgb(230, 200, 60);
pub const GREEN: Color = Color::from_rgb(90, 170, 90);
pub const RED: Color = Color::from_rgb(210, 60, 60);
pub const MAGENTA: Color = Color::from_rgb(200, 80, 200);

/// Header lines above the board.
pub const HEADER: Style = Style::new(YELLOW, BG);
/// `+`, `-` and `|` of the board frame.
pub const FRAME: Style = Style::new(BLACK, GREEN);
pub const WIN_OVERLAY: Style = Style::new(MAGENTA, YELLOW).with_attrs(AttrMask::BOLD);
pub const LOSE_OVERLAY: Style = Style::new(BLACK, RED).with_attrs(AttrMask::BOLD);

/// Foreground for a tile: warmer as the value grows.
pub fn tile_style(value: u32) -> Style {
    let fg = match value {
        2 | 4 => Color::from_rgb(238, 228, 218),
        8 => Color::from_rgb(242, 177, 121),
        16 => Color::from_rgb(245, 149, 99),
        32 => Color::from_rgb(246, 124, 95),
        64 => Color::from_rgb(246, 94, 59),
        128 | 256 => Color::from_rgb(237, 207, 114),
        512 | 1024 => Color::from_rgb(237, 200, 80),
        _ => Color::from_rgb(237, 194, 46),
    };
    let attrs = if value >= 128 {
        AttrMask::BOLD
    } else {
        AttrMask::NONE
    };
    Style::new(fg, BG).with_attrs(attrs)
}
