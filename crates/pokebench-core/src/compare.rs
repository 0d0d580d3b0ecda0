//! Comparison driver: run the concurrent pipeline under a current-thread
//! runtime, then the sequential pipeline, and time both.

use std::time::{Duration, Instant};

use crate::config::FetchConfig;
use crate::report::Reporter;
use crate::{fetch_async, fetch_sync};

/// Outcome of one comparison run.
#[derive(Debug, Clone)]
pub struct CompareReport {
    pub concurrent_elapsed: Duration,
    pub sequential_elapsed: Duration,
    pub concurrent_count: usize,
    pub sequential_count: usize,
}

impl CompareReport {
    /// Sequential wall clock over concurrent wall clock.
    pub fn speedup(&self) -> f64 {
        let concurrent = self.concurrent_elapsed.as_secs_f64();
        if concurrent == 0.0 {
            return 0.0;
        }
        self.sequential_elapsed.as_secs_f64() / concurrent
    }
}

/// Run both pipelines against the configured endpoint and time them.
/// The concurrent leg is multiplexed on this thread; no worker threads
/// are spawned. Partial failures degrade inside the pipelines and still
/// count as a completed run; only transport faults are Err.
pub fn run_comparison(cfg: &FetchConfig, reporter: &dyn Reporter) -> Result<CompareReport, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| e.to_string())?;

    let started = Instant::now();
    let concurrent =
        runtime.block_on(fetch_async::collect_pokedex(cfg, reporter, cfg.target_count))?;
    let concurrent_elapsed = started.elapsed();

    let started = Instant::now();
    let sequential = fetch_sync::collect_pokedex(cfg, reporter, cfg.target_count)?;
    let sequential_elapsed = started.elapsed();

    Ok(CompareReport {
        concurrent_elapsed,
        sequential_elapsed,
        concurrent_count: concurrent.len(),
        sequential_count: sequential.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speedup_is_sequential_over_concurrent() {
        let report = CompareReport {
            concurrent_elapsed: Duration::from_millis(500),
            sequential_elapsed: Duration::from_millis(2_000),
            concurrent_count: 3,
            sequential_count: 3,
        };
        assert!((report.speedup() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn speedup_handles_zero_concurrent_time() {
        let report = CompareReport {
            concurrent_elapsed: Duration::ZERO,
            sequential_elapsed: Duration::from_millis(10),
            concurrent_count: 0,
            sequential_count: 0,
        };
        assert_eq!(report.speedup(), 0.0);
    }
}
