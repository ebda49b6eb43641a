// src/runner.rs
//
// The year loop. Owns sequencing, pacing, retries and the skip policy; every
// per-year, per-block and per-category failure lands in `RunSummary` instead
// of stopping the run.
//
//   Idle → FetchingYear(y) → ParsingYear(y) → Aggregating(y) → … → Writing → Done
//                          ↘ SkippedYear(y)                  ↗
//   Aborted only before the first fetch (bad options, unusable output dir).

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::categories::{self, Origin};
use crate::config::options::RunOptions;
use crate::core::net::{Fetch, FetchedPage};
use crate::data::{Aggregator, NominationRecord};
use crate::error::{FetchError, RunError};
use crate::file::{prepare_output_dir, write_table};
use crate::progress::Progress;
use crate::specs::ceremony::{self, Blocks};
use crate::title::{extract_title, Shape};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    FetchingYear(u16),
    ParsingYear(u16),
    Aggregating(u16),
    SkippedYear { year: u16, reason: String },
    Writing,
    Done,
    Aborted(String),
}

/// What a run produced and what it had to leave out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub years_processed: Vec<u16>,
    pub skipped_years: Vec<(u16, String)>,
    pub skipped_blocks: Vec<(u16, String)>,
    pub failed_writes: Vec<(String, String)>,
    /// Keys derived from labels the alias table does not know.
    pub implicit_categories: BTreeSet<String>,
    pub files_written: Vec<PathBuf>,
    pub records: usize,
}

impl RunSummary {
    /// Nothing was skipped or lost.
    pub fn is_clean(&self) -> bool {
        self.skipped_years.is_empty() && self.skipped_blocks.is_empty() && self.failed_writes.is_empty()
    }

    pub fn log(&self) {
        info!(
            years = self.years_processed.len(),
            records = self.records,
            files = self.files_written.len(),
            "run complete"
        );
        for (year, reason) in &self.skipped_years {
            warn!(year, %reason, "skipped year");
        }
        for (year, reason) in &self.skipped_blocks {
            warn!(year, %reason, "skipped block");
        }
        for (key, reason) in &self.failed_writes {
            warn!(category = %key, %reason, "category not written");
        }
        if !self.implicit_categories.is_empty() {
            let keys: Vec<&str> = self.implicit_categories.iter().map(String::as_str).collect();
            info!(count = keys.len(), keys = %keys.join(", "), "implicit categories");
        }
    }
}

pub struct Driver<'a, F: Fetch> {
    fetcher: F,
    opts: &'a RunOptions,
    progress: &'a mut dyn Progress,
    state: DriverState,
    last_fetch: Option<Instant>,
}

impl<'a, F: Fetch> Driver<'a, F> {
    pub fn new(fetcher: F, opts: &'a RunOptions, progress: &'a mut dyn Progress) -> Self {
        Self { fetcher, opts, progress, state: DriverState::Idle, last_fetch: None }
    }

    pub fn state(&self) -> &DriverState { &self.state }

    /// Hand the fetcher back (tests inspect what was requested).
    pub fn into_fetcher(self) -> F { self.fetcher }

    fn enter(&mut self, next: DriverState) {
        debug!(from = ?self.state, to = ?next, "state");
        self.state = next;
    }

    pub fn run(&mut self) -> Result<RunSummary, RunError> {
        if let Err(e) = self.opts.validate() {
            self.enter(DriverState::Aborted(e.to_string()));
            return Err(e.into());
        }
        let out_dir = self.opts.export.out_dir.clone();
        if let Err(cause) = prepare_output_dir(&out_dir) {
            self.enter(DriverState::Aborted(cause.to_string()));
            return Err(RunError::OutputDir { path: out_dir, cause });
        }

        let years = self.opts.scrape.years();
        self.progress.begin(years.len());

        let mut agg = Aggregator::new();
        let mut summary = RunSummary::default();

        for year in years {
            match self.process_year(year, &mut agg, &mut summary) {
                Ok(()) => {
                    summary.years_processed.push(year);
                    self.progress.item_done(year);
                }
                Err(reason) => {
                    warn!(year, %reason, "skipping year");
                    self.progress.item_skipped(year, &reason);
                    summary.skipped_years.push((year, reason.clone()));
                    self.enter(DriverState::SkippedYear { year, reason });
                }
            }
        }

        self.enter(DriverState::Writing);
        let table = agg.finalize();
        summary.records = table.total_records();
        self.progress.log(&format!(
            "writing {} categories ({} records) to {}",
            table.len(),
            summary.records,
            out_dir.display()
        ));
        for written in write_table(&out_dir, &table, self.opts.export.format) {
            match written {
                Ok(path) => summary.files_written.push(path),
                Err(e) => {
                    warn!(category = %e.category_key, error = %e, "write failed");
                    summary.failed_writes.push((e.category_key.clone(), e.to_string()));
                }
            }
        }

        self.enter(DriverState::Done);
        self.progress.finish();
        Ok(summary)
    }

    /// Fetch, parse and aggregate one year. `Err` carries the skip reason.
    fn process_year(
        &mut self,
        year: u16,
        agg: &mut Aggregator,
        summary: &mut RunSummary,
    ) -> Result<(), String> {
        let page = self.fetch_with_retries(year).map_err(|e| e.to_string())?;

        self.enter(DriverState::ParsingYear(year));
        let blocks = ceremony::parse(&page.html, year).map_err(|e| e.to_string())?;

        self.enter(DriverState::Aggregating(year));
        aggregate_blocks(&page, blocks, agg, summary);
        Ok(())
    }

    fn fetch_with_retries(&mut self, year: u16) -> Result<FetchedPage, FetchError> {
        let attempts = self.opts.scrape.retries.saturating_add(1);
        let mut attempt = 1;
        loop {
            self.pace();
            self.enter(DriverState::FetchingYear(year));
            let res = self.fetcher.fetch(year);
            self.last_fetch = Some(Instant::now());

            match res {
                Ok(page) => return Ok(page),
                Err(e) if attempt < attempts => {
                    warn!(year, attempt, error = %e, "fetch failed, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Sleep until `delay` has passed since the previous fetch returned.
    fn pace(&self) {
        let Some(last) = self.last_fetch else { return };
        let gap = self.opts.scrape.delay();
        let elapsed = last.elapsed();
        if elapsed < gap {
            thread::sleep(gap - elapsed);
        }
    }
}

fn aggregate_blocks(
    page: &FetchedPage,
    blocks: Blocks,
    agg: &mut Aggregator,
    summary: &mut RunSummary,
) {
    let year = page.year;
    for block in blocks {
        let block = match block {
            Ok(b) => b,
            Err(e) => {
                warn!(year, error = %e, "skipping block");
                summary.skipped_blocks.push((year, e.to_string()));
                continue;
            }
        };
        if block.entries.is_empty() {
            debug!(year, label = %block.raw_label, "heading without entries");
            continue;
        }

        let norm = categories::normalize(&block.raw_label, year);
        if norm.origin == Origin::Derived {
            debug!(year, label = %block.raw_label, key = %norm.key, "implicit category");
            summary.implicit_categories.insert(norm.key.clone());
        }
        let shape = Shape::of(&norm.key);

        for entry in block.entries {
            agg.add(NominationRecord {
                ceremony_year: year,
                category: norm.key.clone(),
                film: extract_title(&entry.text, year, shape),
                is_winner: entry.is_winner,
                source_url: page.url.clone(),
            });
        }
    }
}
