//! Blocking HTTP client: one ureq Agent per run for connection reuse.

use std::io::Read;
use std::time::Duration;

const MAX_IDLE_CONNECTIONS: usize = 32;

/// Thin wrapper over a shared Agent. Created before the first request of a
/// sequential run and dropped after the last.
pub struct HttpClient {
    agent: ureq::Agent,
}

impl HttpClient {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .max_idle_connections(MAX_IDLE_CONNECTIONS)
            .build();
        Self { agent }
    }

    /// GET url with a per-request timeout. Returns (status, body bytes).
    /// Non-2xx statuses come back as Ok with an empty body; only transport
    /// failures (connect errors, timeouts) are Err.
    pub fn get(&self, url: &str, timeout: Duration) -> Result<(u16, Vec<u8>), String> {
        match self.agent.get(url).timeout(timeout).call() {
            Ok(resp) => {
                let status = resp.status();
                let mut body = Vec::new();
                resp.into_reader()
                    .read_to_end(&mut body)
                    .map_err(|e| e.to_string())?;
                Ok((status, body))
            }
            Err(ureq::Error::Status(code, _)) => Ok((code, Vec::new())),
            Err(e) => Err(e.to_string()),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
