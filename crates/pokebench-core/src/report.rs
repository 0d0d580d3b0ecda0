//! Injectable diagnostics: pipelines report progress through a trait so
//! tests can assert on events without capturing stdout.

use chrono::Local;

/// Observer for pipeline progress. One implementation prints to stdout;
/// tests supply their own.
pub trait Reporter: Send + Sync {
    /// A listing page request is about to be issued.
    fn page_request(&self, url: &str);
    /// A detail request is about to be issued.
    fn detail_request(&self, url: &str);
    /// The API answered with a non-success status; the call yields no data.
    fn bad_status(&self, url: &str, status: u16);
    /// A detail record was inserted into the pokedex under `name`.
    fn record_saved(&self, name: &str);
    /// The record fetched for `requested` had no name key and was dropped.
    fn record_skipped(&self, requested: &str);
}

fn is_quiet() -> bool {
    std::env::var("POKEBENCH_QUIET")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}

/// Prints timestamped lines to stdout. POKEBENCH_QUIET=1 silences it.
pub struct StdoutReporter;

impl StdoutReporter {
    fn line(&self, message: &str) {
        if is_quiet() {
            return;
        }
        println!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message);
    }
}

impl Reporter for StdoutReporter {
    fn page_request(&self, url: &str) {
        self.line(&format!("retrieving page: {}", url));
    }

    fn detail_request(&self, url: &str) {
        self.line(&format!("retrieving details: {}", url));
    }

    fn bad_status(&self, url: &str, status: u16) {
        self.line(&format!("api answered HTTP {} for {}", status, url));
    }

    fn record_saved(&self, name: &str) {
        self.line(&format!("pokemon '{}' saved in pokedex", name));
    }

    fn record_skipped(&self, requested: &str) {
        self.line(&format!("no usable record for '{}', skipped", requested));
    }
}
