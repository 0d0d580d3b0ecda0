//! Concurrent pipeline: every page and every detail request is its own
//! future, all issued at once and joined in submission order on a single
//! thread of control.

use futures::future::join_all;
use serde_json::Value;

use crate::api::{self, Pokedex};
use crate::config::FetchConfig;
use crate::http_async::AsyncHttpClient;
use crate::report::Reporter;

/// Collect item names, capped by `max` when given, otherwise by the count
/// the API advertises on its root listing. All page requests run
/// concurrently; the output keeps page order regardless of completion
/// order (join_all returns results positionally).
pub async fn fetch_names(
    client: &AsyncHttpClient,
    cfg: &FetchConfig,
    reporter: &dyn Reporter,
    max: Option<usize>,
) -> Result<Vec<String>, String> {
    let (status, body) = client.get(&cfg.base_url, cfg.page_timeout).await?;
    if status != 200 {
        reporter.bad_status(&cfg.base_url, status);
        return Ok(Vec::new());
    }

    let cutoff = match max {
        Some(n) => n,
        None => api::parse_count(&body)? as usize,
    };
    let urls = api::page_urls(&cfg.base_url, cutoff, cfg.page_size);
    let pages = join_all(urls.iter().map(|url| fetch_page(client, cfg, reporter, url))).await;

    let mut names = Vec::new();
    for page in pages {
        names.extend(page?);
    }
    Ok(names)
}

async fn fetch_page(
    client: &AsyncHttpClient,
    cfg: &FetchConfig,
    reporter: &dyn Reporter,
    url: &str,
) -> Result<Vec<String>, String> {
    reporter.page_request(url);
    let (status, body) = client.get(url, cfg.page_timeout).await?;
    if status != 200 {
        reporter.bad_status(url, status);
        return Ok(Vec::new());
    }
    let listing = api::parse_listing(&body)?;
    Ok(listing.results.into_iter().map(|r| r.name).collect())
}

/// Fetch one detail record. A non-success status degrades to an empty
/// record; batching is the caller's job.
pub async fn fetch_detail(
    client: &AsyncHttpClient,
    cfg: &FetchConfig,
    reporter: &dyn Reporter,
    url: &str,
) -> Result<Value, String> {
    reporter.detail_request(url);
    let (status, body) = client.get(url, cfg.detail_timeout).await?;
    if status != 200 {
        reporter.bad_status(url, status);
        return Ok(api::empty_record());
    }
    api::parse_detail(&body)
}

/// Build the pokedex for `target` items with one shared client, fanning
/// out all detail requests at once and inserting results in submission
/// order, keyed by each record's own name field.
pub async fn collect_pokedex(
    cfg: &FetchConfig,
    reporter: &dyn Reporter,
    target: usize,
) -> Result<Pokedex, String> {
    let client = AsyncHttpClient::new()?;
    let names = fetch_names(&client, cfg, reporter, Some(target)).await?;

    let detail_futures = names.iter().map(|name| {
        let url = api::detail_url(&cfg.base_url, name);
        let client = &client;
        async move { fetch_detail(client, cfg, reporter, &url).await }
    });
    let details = join_all(detail_futures).await;

    let mut pokedex = Pokedex::new();
    for (name, detail) in names.iter().zip(details) {
        let detail = detail?;
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
