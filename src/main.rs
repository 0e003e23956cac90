mod engine;
mod models;
mod storage;
mod types;

use std::io::{BufWriter, Write, stderr, stdout};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::engine::ImportEngine;
use crate::storage::TransactionStore;

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: A two-argument binary does not justify pulling in the clap crate.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: transaction-import-engine [feed].jsonl [log_level:optional] > [output].jsonl");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args
        .get(2)
        .map(|s| parse_log_level(s))
        .unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let storage = Arc::new(TransactionStore::new());
    let engine = ImportEngine::new(storage.clone());

    let timer = Instant::now();
    let summary = engine.run(path).await?;
    let duration = timer.elapsed();

    info!(
        "Imported feed in {duration:?}: {} accepted, {} rejected, {} duplicates",
        summary.accepted, summary.rejected, summary.duplicates
    );

    write_results_to_stdout(storage)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Accepted transactions go to stdout, so logging must stay on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

fn write_results_to_stdout(storage: Arc<TransactionStore>) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    let mut transactions: Vec<_> = storage.iter().map(|entry| entry.value().clone()).collect();
    transactions.sort_by_key(|transaction| transaction.id);

    for transaction in transactions {
        writeln!(output, "{}", serde_json::to_string(&transaction)?)?;
    }

    output.flush()?;

    Ok(())
}
