// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::*;
use crate::config::options::{ExportFormat, ExportOptions, RunOptions, ScrapeOptions};
use crate::config::proxy::ProxyConfig;
use crate::core::net::HttpFetcher;
use crate::error::RunError;
use crate::progress::TracingProgress;
use crate::runner::{Driver, RunSummary};

/// Scrape Academy Awards nominees per category, one file per category.
///
/// Proxy credentials come from the environment:
/// OSCARS_PROXY_USERNAME, OSCARS_PROXY_PASSWORD (required),
/// OSCARS_PROXY_HOST, OSCARS_PROXY_PORT (optional).
#[derive(Debug, Parser)]
#[command(name = "oscars_scrape", version, about)]
pub struct Args {
    /// First ceremony year (inclusive).
    #[arg(long, default_value_t = DEFAULT_START_YEAR)]
    pub start: u16,

    /// Last ceremony year (inclusive).
    #[arg(long, default_value_t = DEFAULT_END_YEAR)]
    pub end: u16,

    /// Minimum seconds between two requests.
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    pub delay: f64,

    /// Output directory.
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Extra attempts per year after a failed request.
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Debug-level logging for this crate.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        RunOptions {
            scrape: ScrapeOptions {
                start: self.start,
                end: self.end,
                delay_secs: self.delay,
                retries: self.retries,
                timeout_secs: self.timeout,
            },
            export: ExportOptions { format: self.format, out_dir: self.out.clone() },
        }
    }
}

/// Validate options, read the proxy from the environment and run the year loop.
pub fn run(args: &Args) -> Result<RunSummary, RunError> {
    let opts = args.to_options();
    opts.validate()?;

    let proxy = ProxyConfig::from_env()?;
    tracing::debug!(?proxy, "proxy");
    let fetcher = HttpFetcher::new(&proxy, &opts.scrape)?;

    let mut progress = TracingProgress::default();
    let summary = Driver::new(fetcher, &opts, &mut progress).run()?;
    summary.log();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let a = Args::try_parse_from(["oscars_scrape"]).expect("parse");
        assert_eq!(a.to_options(), RunOptions::default());
        assert!(!a.verbose);
    }

    #[test]
    fn flags_map_onto_options() {
        let a = Args::try_parse_from([
            "oscars_scrape", "--start", "1938", "--end", "1940", "--delay", "0.5",
            "--format", "tsv", "--out", "tmp/run", "--retries", "0", "--timeout", "5", "-v",
        ])
        .expect("parse");
        let o = a.to_options();
        assert_eq!(o.scrape.years(), 1938..=1940);
        assert_eq!(o.scrape.delay_secs, 0.5);
        assert_eq!(o.scrape.retries, 0);
        assert_eq!(o.export.format, ExportFormat::Tsv);
        assert_eq!(o.export.out_dir, PathBuf::from("tmp/run"));
        assert!(a.verbose);
    }

    #[test]
    fn reversed_range_fails_before_env_is_read() {
        let a = Args::try_parse_from(["oscars_scrape", "--start", "2000", "--end", "1990"]).expect("parse");
        assert!(matches!(run(&a), Err(RunError::Aborted(_))));
    }
}
