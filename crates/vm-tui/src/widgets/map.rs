//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use vm_core::{Grid, PLAYER_SYM, Pos, TileType};

use crate::theme::Theme;

/// First visible index along one axis so `center` stays on screen
///
/// The view follows the player but never scrolls past the map edges.
pub fn viewport_origin(center: usize, map_len: usize, view_len: usize) -> usize {
    if map_len <= view_len {
        return 0;
    }
    center.saturating_sub(view_len / 2).min(map_len - view_len)
}

/// Widget for rendering the visible part of the map around the player
pub struct MapWidget<'a> {
    grid: &'a Grid,
    player: Pos,
    theme: &'a Theme,
    title: &'a str,
}

impl<'a> MapWidget<'a> {
    pub fn new(grid: &'a Grid, player: Pos, theme: &'a Theme, title: &'a str) -> Self {
        Self {
            grid,
            player,
            theme,
            title,
        }
    }

    fn cell_display(&self, pos: Pos) -> (char, Style) {
        if pos == self.player {
            return (PLAYER_SYM, Style::default().fg(self.theme.map_player).bold());
        }
        match self.grid.tile(pos).map(|t| t.typ) {
            Some(TileType::Wall) => (
                TileType::Wall.symbol(),
                Style::default()
                    .fg(self.theme.map_wall_fg)
                    .bg(self.theme.map_wall_bg),
            ),
            Some(TileType::Floor) => (
                TileType::Floor.symbol(),
                Style::default().fg(self.theme.map_floor),
            ),
            None => (' ', Style::default()),
        }
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(self.title);

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = (inner.height as usize).min(self.grid.height());
        let cols = (inner.width as usize).min(self.grid.width());
        let top = viewport_origin(self.player.row, self.grid.height(), rows);
        let left = viewport_origin(self.player.col, self.grid.width(), cols);

        for y in 0..rows {
            for x in 0..cols {
                let (ch, style) = self.cell_display(Pos::new(top + y, left + x));
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
