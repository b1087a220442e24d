//! vm-tui: Terminal viewer using ratatui
//!
//! Provides the map viewer, the progress display and log setup for the
//! `vmap` binary.

pub mod app;
pub mod input;
pub mod logging;
pub mod progress;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use input::{Command, key_to_command};
pub use progress::TerminalProgress;
pub use theme::Theme;
