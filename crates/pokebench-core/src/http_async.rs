//! Async HTTP client: one reqwest Client per run, multiplexed connections.

use std::time::Duration;

use reqwest::Client;

const MAX_IDLE_PER_HOST: usize = 10;
const IDLE_TIMEOUT_SECS: u64 = 90;

/// Thin wrapper over a shared Client. Created before the first request of
/// a concurrent run and dropped after the last.
pub struct AsyncHttpClient {
    client: Client,
}

impl AsyncHttpClient {
    pub fn new() -> Result<Self, String> {
        let client = Client::builder()
            .pool_max_idle_per_host(MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(IDLE_TIMEOUT_SECS))
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Self { client })
    }

    /// GET url with a per-request timeout. Returns (status, body bytes).
    /// Any HTTP status comes back as Ok; only transport failures are Err.
    pub async fn get(&self, url: &str, timeout: Duration) -> Result<(u16, Vec<u8>), String> {
        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| e.to_string())?.to_vec();
        Ok((status, body))
    }
}
