//! Core library for pokebench: config, reporting, HTTP clients, and the
//! concurrent/sequential fetch pipelines compared by the CLI binary.

pub mod api;
pub mod compare;
pub mod config;
pub mod fetch_async;
pub mod fetch_sync;
pub mod http_async;
pub mod http_client;
pub mod report;

// Re-export main API for CLI
pub use api::Pokedex;
pub use compare::{run_comparison, CompareReport};
pub use config::FetchConfig;
pub use http_async::AsyncHttpClient;
pub use http_client::HttpClient;
pub use report::{Reporter, StdoutReporter};
