//! Run configuration: endpoint, page size, timeouts, target count.
//! One struct passed down explicitly; env overrides, no globals.

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DETAIL_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_TARGET_COUNT: usize = 1302;

/// Settings for one comparison run.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Listing endpoint root; detail URLs are `<base_url>/<name>`.
    pub base_url: String,
    /// Names requested per listing page (the `limit` query parameter).
    pub page_size: usize,
    /// Per-request timeout for count and page fetches.
    pub page_timeout: Duration,
    /// Per-request timeout for detail fetches.
    pub detail_timeout: Duration,
    /// How many items the comparison run asks each pipeline for.
    pub target_count: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_timeout: Duration::from_millis(DEFAULT_PAGE_TIMEOUT_MS),
            detail_timeout: Duration::from_millis(DEFAULT_DETAIL_TIMEOUT_MS),
            target_count: DEFAULT_TARGET_COUNT,
        }
    }
}

fn env_trimmed(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl FetchConfig {
    /// Defaults with POKEBENCH_* overrides applied. Unparseable values are
    /// ignored rather than rejected.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(url) = env_trimmed("POKEBENCH_API_URL") {
            cfg.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(n) = env_trimmed("POKEBENCH_PAGE_SIZE").and_then(|v| v.parse::<usize>().ok()) {
            cfg.page_size = n.max(1);
        }
        if let Some(n) = env_trimmed("POKEBENCH_COUNT").and_then(|v| v.parse::<usize>().ok()) {
            cfg.target_count = n;
        }
        if let Some(ms) =
            env_trimmed("POKEBENCH_PAGE_TIMEOUT_MS").and_then(|v| v.parse::<u64>().ok())
        {
            cfg.page_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) =
            env_trimmed("POKEBENCH_DETAIL_TIMEOUT_MS").and_then(|v| v.parse::<u64>().ok())
        {
            cfg.detail_timeout = Duration::from_millis(ms);
        }
        cfg
    }
}
