//! Status panel widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use vm_core::{Grid, Pos, TileType};

use crate::theme::Theme;

const KEY_HELP: [&str; 2] = ["wasd/arrows: move", "q/Esc: quit"];

/// Widget for the side panel: player position, map size and key help
pub struct StatusWidget<'a> {
    grid: &'a Grid,
    player: Pos,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(grid: &'a Grid, player: Pos, theme: &'a Theme) -> Self {
        Self {
            grid,
            player,
            theme,
        }
    }

    /// Map and player lines shown above the key help
    pub fn lines(&self) -> Vec<String> {
        let g = self.grid;
        vec![
            format!("Pos: {}", self.player),
            format!("Size: {}x{}", g.height(), g.width()),
            format!("Spawn: {}", g.spawn()),
            format!("Floor: {}", g.count(TileType::Floor)),
            format!("Wall: {}", g.count(TileType::Wall)),
        ]
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(Span::styled("Status", Style::default().fg(self.theme.accent)));
        let inner = block.inner(area);
        block.render(area, buf);

        let text = Style::default().fg(self.theme.text);
        let dim = Style::default().fg(self.theme.text_dim);

        let mut y = inner.y;
        let bottom = inner.y + inner.height;
        for line in self.lines() {
            if y >= bottom {
                return;
            }
            buf.set_stringn(inner.x, y, &line, inner.width as usize, text);
            y += 1;
        }

        // blank separator before the help
        y += 1;
        for line in KEY_HELP {
            if y >= bottom {
                return;
            }
            buf.set_stringn(inner.x, y, line, inner.width as usize, dim);
            y += 1;
        }
    }
}
