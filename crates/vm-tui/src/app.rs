//! Viewer state and main UI controller

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use tracing::debug;

use vm_core::{Grid, Pos};

use crate::input::{Command, key_to_command};
use crate::theme::Theme;
use crate::widgets::{MapWidget, StatusWidget};

/// Width of the side status panel, border included
pub const STATUS_WIDTH: u16 = 24;

/// Map viewer: a loaded grid and a player walking on its floor
pub struct App {
    grid: Grid,
    player: Pos,
    title: String,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Place the player on the map's spawn point
    pub fn new(grid: Grid, title: impl Into<String>) -> Self {
        let player = grid.spawn();
        Self {
            grid,
            player,
            title: title.into(),
            theme: Theme::default(),
            should_quit: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translate a terminal event into a command, if it maps to one
    pub fn handle_event(&self, event: Event) -> Option<Command> {
        match event {
            Event::Key(key) => key_to_command(key),
            _ => None,
        }
    }

    /// Apply a command; moves into walls or off the map leave the player in place
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Move(dir) => {
                let next = self.grid.step(self.player, dir);
                if next == self.player {
                    debug!(from = %self.player, %dir, "move blocked");
                } else {
                    self.player = next;
                }
            }
            Command::Quit => self.should_quit = true,
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Layout: map on the left, status panel on the right
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(3), Constraint::Length(STATUS_WIDTH)])
            .split(frame.area());

        let map_widget = MapWidget::new(&self.grid, self.player, &self.theme, &self.title);
        frame.render_widget(map_widget, chunks[0]);

        let status_widget = StatusWidget::new(&self.grid, self.player, &self.theme);
        frame.render_widget(status_widget, chunks[1]);
    }
}
