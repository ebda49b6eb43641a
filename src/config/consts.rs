// src/config/consts.rs

// Net config
pub const CEREMONY_URL: &str = "https://www.oscars.org/oscars/ceremonies/{year}";
pub const USER_AGENT: &str = concat!("oscars_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

// Proxy (environment)
pub const PROXY_ENV_PREFIX: &str = "OSCARS_PROXY";
pub const DEFAULT_PROXY_HOST: &str = "brd.superproxy.io";
pub const DEFAULT_PROXY_PORT: u16 = 22225;

// Scrape
pub const DEFAULT_START_YEAR: u16 = 1929;
pub const DEFAULT_END_YEAR: u16 = 2025;
pub const DEFAULT_DELAY_SECS: f64 = 2.0;
pub const DEFAULT_RETRIES: u32 = 2;

/// Last ceremony year whose pages list films only (1929..=1934).
pub const EARLY_ERA_LAST_YEAR: u16 = 1934;

// Export
pub const DEFAULT_OUT_DIR: &str = "data/oscars_nominees_by_category";
pub const HEADER: [&str; 5] = ["ceremony_year", "category", "film", "is_winner", "source_url"];
