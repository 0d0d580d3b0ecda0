//! Thin CLI layer: styled output around pokebench-core's comparison run.
//! Crash-proof: panic caught and reported; all errors return Result.

use clap::Command;
use colored::Colorize;
use std::env;
use std::io::IsTerminal;

use pokebench_core::{run_comparison, FetchConfig, StdoutReporter};

// ---- UI helpers (no-op when stdout isn't a TTY) ----

fn use_color() -> bool {
    std::io::stdout().is_terminal()
        && env::var("NO_COLOR").unwrap_or_default().is_empty()
}

fn success(msg: &str) {
    if use_color() {
        println!("{}", msg.green());
    } else {
        println!("{}", msg);
    }
}

fn error(msg: &str) {
    if use_color() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{}", msg);
    }
}

fn info(msg: &str) {
    if use_color() {
        println!("{}", msg.cyan());
    } else {
        println!("{}", msg);
    }
}

fn dim(msg: &str) {
    if use_color() {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

fn run() -> Result<(), String> {
    // No behavioral flags: the comparison always runs with the configured
    // target count. clap only provides --help/--version.
    Command::new("pokebench")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare concurrent vs sequential fetching from the PokeAPI")
        .after_help(
            "Environment:\n  POKEBENCH_API_URL            listing endpoint root\n  POKEBENCH_COUNT              items to fetch per pipeline\n  POKEBENCH_PAGE_SIZE          names per listing page\n  POKEBENCH_QUIET              1 silences per-request diagnostics",
        )
        .get_matches();

    let cfg = FetchConfig::from_env();
    let reporter = StdoutReporter;

    info(&format!(
        "fetching up to {} pokemon from {}",
        cfg.target_count, cfg.base_url
    ));
    let report = run_comparison(&cfg, &reporter)?;

    dim(&format!(
        "concurrent pipeline: {} pokemon in {:.2?}",
        report.concurrent_count, report.concurrent_elapsed
    ));
    dim(&format!(
        "sequential pipeline: {} pokemon in {:.2?}",
        report.sequential_count, report.sequential_elapsed
    ));
    success(&format!(
        "concurrent fetching is {:.1}x faster than sequential",
        report.speedup()
    ));
    Ok(())
}

fn main() {
    if !use_color() {
        colored::control::set_override(false);
    }

    let code = match std::panic::catch_unwind(|| run()) {
        Ok(Ok(())) => 0,
        Ok(Err(e)) => {
            error(&e);
            1
        }
        Err(_) => {
            error("An unexpected error occurred. Please report this issue.");
            1
        }
    };
    std::process::exit(code);
}
