// src/progress.rs
/// Lightweight progress reporting for the year loop.
/// Frontends implement this to surface status; the runner only calls it.
pub trait Progress {
    /// Called at the start with the number of years in range.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One ceremony year was fetched and parsed.
    fn item_done(&mut self, _year: u16) {}

    /// One ceremony year was skipped.
    fn item_skipped(&mut self, _year: u16, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// CLI sink: reports through `tracing` as `[done/total]` lines.
#[derive(Debug, Default)]
pub struct TracingProgress {
    total: usize,
    seen: usize,
}

impl Progress for TracingProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.seen = 0;
        tracing::info!(years = total, "starting");
    }

    fn log(&mut self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn item_done(&mut self, year: u16) {
        self.seen += 1;
        tracing::info!("[{}/{}] {year} ok", self.seen, self.total);
    }

    fn item_skipped(&mut self, year: u16, reason: &str) {
        self.seen += 1;
        tracing::warn!("[{}/{}] {year} skipped: {reason}", self.seen, self.total);
    }

    fn finish(&mut self) {
        tracing::info!(processed = self.seen, "finished");
    }
}
