//! PokeAPI surface: URL construction and response shapes.
//! The listing page has a known shape; detail records stay opaque JSON.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Name -> detail record, built fresh per pipeline run.
pub type Pokedex = HashMap<String, Value>;

/// One listing page. Only the names are used downstream.
#[derive(Debug, Deserialize)]
pub struct PageListing {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

pub fn page_url(base: &str, offset: usize, limit: usize) -> String {
    format!("{}/?offset={}&limit={}", base.trim_end_matches('/'), offset, limit)
}

pub fn detail_url(base: &str, name: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), name)
}

/// Page URLs covering `[0, cutoff)` in fixed windows. The final window is
/// never trimmed: a cutoff that is not a multiple of `page_size` still
/// requests a whole page, so the caller can receive more names than asked.
pub fn page_urls(base: &str, cutoff: usize, page_size: usize) -> Vec<String> {
    let mut urls = Vec::new();
    let mut offset = 0;
    while offset < cutoff {
        urls.push(page_url(base, offset, page_size));
        offset += page_size;
    }
    urls
}

/// Total item count from the listing root body.
pub fn parse_count(body: &[u8]) -> Result<u64, String> {
    let v: Value = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    v.get("count")
        .and_then(|c| c.as_u64())
        .ok_or_else(|| "listing response has no usable count field".to_string())
}

pub fn parse_listing(body: &[u8]) -> Result<PageListing, String> {
    serde_json::from_slice(body).map_err(|e| e.to_string())
}

pub fn parse_detail(body: &[u8]) -> Result<Value, String> {
    serde_json::from_slice(body).map_err(|e| e.to_string())
}

/// Aggregation key: the record's own name field, not the requested name.
pub fn record_key(detail: &Value) -> Option<String> {
    detail.get("name").and_then(|n| n.as_str()).map(str::to_string)
}

/// The degraded result of a failed detail fetch.
pub fn empty_record() -> Value {
    Value::Object(serde_json::Map::new())
}
