//! Sequential pipeline: the same three stages as fetch_async, one
//! blocking request at a time.

use serde_json::Value;

use crate::api::{self, Pokedex};
use crate::config::FetchConfig;
use crate::http_client::HttpClient;
use crate::report::Reporter;

/// Collect item names, capped by `max` when given, otherwise by the count
/// the API advertises. Pages are fetched one at a time in offset order.
pub fn fetch_names(
    client: &HttpClient,
    cfg: &FetchConfig,
    reporter: &dyn Reporter,
    max: Option<usize>,
) -> Result<Vec<String>, String> {
    let (status, body) = client.get(&cfg.base_url, cfg.page_timeout)?;
    if status != 200 {
        reporter.bad_status(&cfg.base_url, status);
        return Ok(Vec::new());
    }

    let cutoff = match max {
        Some(n) => n,
        None => api::parse_count(&body)? as usize,
    };
    let mut names = Vec::new();
    for url in api::page_urls(&cfg.base_url, cutoff, cfg.page_size) {
        names.extend(fetch_page(client, cfg, reporter, &url)?);
    }
    Ok(names)
}

fn fetch_page(
    client: &HttpClient,
    cfg: &FetchConfig,
    reporter: &dyn Reporter,
    url: &str,
) -> Result<Vec<String>, String> {
    reporter.page_request(url);
    let (status, body) = client.get(url, cfg.page_timeout)?;
    if status != 200 {
        reporter.bad_status(url, status);
        return Ok(Vec::new());
    }
    let listing = api::parse_listing(&body)?;
    Ok(listing.results.into_iter().map(|r| r.name).collect())
}

/// Fetch one detail record. A non-success status degrades to an empty
/// record.
pub fn fetch_detail(
    client: &HttpClient,
    cfg: &FetchConfig,
    reporter: &dyn Reporter,
    url: &str,
) -> Result<Value, String> {
    reporter.detail_request(url);
    let (status, body) = client.get(url, cfg.detail_timeout)?;
    if status != 200 {
        reporter.bad_status(url, status);
        return Ok(api::empty_record());
    }
    api::parse_detail(&body)
}

/// Build the pokedex for `target` items with one shared agent, fetching
/// and inserting one record at a time, keyed by each record's own name
/// field.
pub fn collect_pokedex(
    cfg: &FetchConfig,
    reporter: &dyn Reporter,
    target: usize,
) -> Result<Pokedex, String> {
    let client = HttpClient::new();
    let names = fetch_names(&client, cfg, reporter, Some(target))?;

    let mut pokedex = Pokedex::new();
    for name in &names {
        let url = api::detail_url(&cfg.base_url, name);
        let detail = fetch_detail(&client, cfg, reporter, &url)?;
        match api::record_key(&detail) {
            Some(key) => {
                reporter.record_saved(&key);
                pokedex.insert(key, detail);
            }
            None => reporter.record_skipped(name),
        }
    }
    Ok(pokedex)
}
