//! Progress reporting for long-running map operations
//!
//! Generation and file transfer report `(stage, percent)` pairs to an
//! observer. Reports are advisory; observers must not assume every percent
//! value is delivered.

use strum::{Display, EnumIter};

/// Pipeline stage being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Stage {
    #[strum(serialize = "Allocating tiles")]
    Tiles,
    #[strum(serialize = "Placing region seeds")]
    Seeds,
    #[strum(serialize = "Classifying tiles")]
    Classify,
    #[strum(serialize = "Linking neighbors")]
    Link,
    #[strum(serialize = "Encoding map")]
    Encode,
    #[strum(serialize = "Writing file")]
    Write,
    #[strum(serialize = "Reading file")]
    Read,
    #[strum(serialize = "Rebuilding tiles")]
    Decode,
}

/// Receives progress updates
pub trait ProgressObserver {
    fn on_progress(&mut self, stage: Stage, percent: u8);
}

impl<F> ProgressObserver for F
where
    F: FnMut(Stage, u8),
{
    fn on_progress(&mut self, stage: Stage, percent: u8) {
        self(stage, percent)
    }
}

/// Observer that ignores all updates
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _stage: Stage, _percent: u8) {}
}

/// Integer percentage of `done` out of `total`, clamped to 100
pub fn percent_of(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (done.min(total) * 100 / total) as u8
}

/// Forwards a stage's progress to an observer, only when the percent changes
pub struct StageReporter<'a> {
    observer: &'a mut dyn ProgressObserver,
    stage: Stage,
    total: usize,
    last: Option<u8>,
}

impl<'a> StageReporter<'a> {
    pub fn new(observer: &'a mut dyn ProgressObserver, stage: Stage, total: usize) -> Self {
        let mut reporter = Self {
            observer,
            stage,
            total,
            last: None,
        };
        reporter.tick(0);
        reporter
    }

    pub fn tick(&mut self, done: usize) {
        let percent = percent_of(done, self.total);
        if self.last != Some(percent) {
            self.last = Some(percent);
            self.observer.on_progress(self.stage, percent);
        }
    }

    pub fn finish(mut self) {
        self.tick(self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(0, 10), 0);
        assert_eq!(percent_of(5, 10), 50);
        assert_eq!(percent_of(10, 10), 100);
        assert_eq!(percent_of(20, 10), 100);
        assert_eq!(percent_of(0, 0), 100);
    }

    #[test]
    fn test_reporter_deduplicates() {
        let mut seen = Vec::new();
        let mut observer = |stage: Stage, percent: u8| seen.push((stage, percent));
        let mut reporter = StageReporter::new(&mut observer, Stage::Classify, 1000);
        for done in 0..1000 {
            reporter.tick(done);
        }
        reporter.finish();

        assert_eq!(seen.len(), 101);
        assert_eq!(seen.first(), Some(&(Stage::Classify, 0)));
        assert_eq!(seen.last(), Some(&(Stage::Classify, 100)));
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::Link.to_string(), "Linking neighbors");
        assert_eq!(Stage::Read.to_string(), "Reading file");
    }
}
