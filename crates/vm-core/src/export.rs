//! Human-readable map export
//!
//! Renders a grid as rows of glyphs, either as plain text or wrapped in a
//! small monospace HTML page for viewing in a browser.

use std::fmt::Write;

use crate::map::Grid;
use crate::PLAYER_SYM;

/// Render the grid as one line of glyphs per row
///
/// The spawn cell is drawn with the player glyph when `mark_spawn` is set.
pub fn to_text(grid: &Grid, mark_spawn: bool) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() + 1));
    for row in 0..grid.height() {
        for tile in grid.row(row) {
            if mark_spawn && tile.pos == grid.spawn() {
                out.push(PLAYER_SYM);
            } else {
                out.push(tile.symbol());
            }
        }
        out.push('\n');
    }
    out
}

/// Render the grid as an HTML document
pub fn to_html(grid: &Grid, title: &str) -> String {
    let body = to_text(grid, true);
    let mut out = String::with_capacity(body.len() + 256);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(title));
    out.push_str("<style>body{font-family: monospace; font-size: 10px;}</style>\n");
    out.push_str("</head>\n<body>\n<pre>\n");
    out.push_str(&body);
    out.push_str("</pre>\n</body>\n</html>\n");
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
