//! seedsearch binary
//!
//! Evaluates the verifiable curve generation procedure for every seed within
//! `--margin` of `--start_seed` and prints one line per seed.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package curvegen-seedsearch -- \
//!     -p FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF \
//!     --start_seed 3045AE6FC8422F64ED579528D38120EAE12196D5 --margin 5
//! ```

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use slog::{o, Drain, Logger};

use curvegen_seedsearch::{search, Args, Reporter, SearchConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    let logger = create_logger(&args.log_level);

    let config = SearchConfig::try_from(args).context("invalid search arguments")?;

    let candidates = if config.threads > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
            .context("failed to build worker pool")?;
        pool.install(|| search(&config, &logger))
    } else {
        search(&config, &logger)
    }
    .context("search failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Reporter::new(config.color)
        .write_all(&mut out, &candidates)
        .context("failed to write report")?;

    Ok(())
}

fn create_logger(level: &str) -> Logger {
    use slog::Level;
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::Trace,
        "debug" => Level::Debug,
        "info" => Level::Info,
        "warn" => Level::Warning,
        "error" => Level::Error,
        _ => Level::Warning,
    };

    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog::LevelFilter::new(drain, level).fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}
