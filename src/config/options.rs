// src/config/options.rs
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl RunOptions {
    /// Reject option combinations the runner cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scrape;
        if s.start > s.end {
            return Err(ConfigError::InvalidYearRange { start: s.start, end: s.end });
        }
        if !s.delay_secs.is_finite() || s.delay_secs < 0.0 {
            return Err(ConfigError::InvalidDelay(s.delay_secs));
        }
        if s.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    pub start: u16,
    pub end: u16,
    /// Minimum gap between two fetches, in seconds.
    pub delay_secs: f64,
    /// Extra attempts per year after the first failure.
    pub retries: u32,
    pub timeout_secs: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
            delay_secs: DEFAULT_DELAY_SECS,
            retries: DEFAULT_RETRIES,
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ScrapeOptions {
    pub fn years(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }

    /// Call `validate` first; a negative or NaN delay is clamped to zero here.
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_secs).unwrap_or(Duration::ZERO)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Run directory; one file per category lands here.
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_contract() {
        let o = RunOptions::default();
        assert_eq!(o.scrape.start, 1929);
        assert_eq!(o.scrape.end, 2025);
        assert_eq!(o.scrape.delay(), Duration::from_secs(2));
        assert_eq!(o.export.format.ext(), "csv");
        assert!(o.validate().is_ok());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let mut o = RunOptions::default();
        o.scrape.start = 2000;
        o.scrape.end = 1999;
        assert!(matches!(
            o.validate(),
            Err(ConfigError::InvalidYearRange { start: 2000, end: 1999 })
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut o = RunOptions::default();
        o.scrape.timeout_secs = 0;
        assert!(matches!(o.validate(), Err(ConfigError::InvalidTimeout)));
        o.scrape.timeout_secs = 1;
        assert!(o.validate().is_ok());
    }

    #[test]
    fn negative_delay_is_rejected() {
        let mut o = RunOptions::default();
        o.scrape.delay_secs = -1.0;
        assert!(matches!(o.validate(), Err(ConfigError::InvalidDelay(_))));
    }

    #[test]
    fn tsv_uses_tab() {
        assert_eq!(ExportFormat::Tsv.delim(), b'\t');
        assert_eq!(ExportFormat::Tsv.ext(), "tsv");
    }
}
