//! Progress display for generation, saving and loading
//!
//! Prints one line per percent change, `[Stage] -> N%`, to a writer
//! (stderr in the binary) before the viewer takes over the terminal.

use std::io::Write;

use vm_core::{ProgressObserver, Stage};

pub struct TerminalProgress<W: Write> {
    out: W,
}

impl TerminalProgress<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> TerminalProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressObserver for TerminalProgress<W> {
    fn on_progress(&mut self, stage: Stage, percent: u8) {
        // A closed stderr must not abort generation
        let _ = writeln!(self.out, "[{stage}] -> {percent}%");
    }
}
