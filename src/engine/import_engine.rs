use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, spawn_blocking};
use tracing::{debug, error, warn};

use crate::models::Transaction;
use crate::storage::{Storage, TransactionStore};

/// Streaming validation pipeline for JSON Lines transaction feeds.
pub struct ImportEngine {
    storage: Arc<TransactionStore>,
    backpressure: usize,
}

/// Counts of how the documents in a feed were handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Documents that validated and were stored.
    pub accepted: u64,
    /// Documents that failed validation.
    pub rejected: u64,
    /// Valid documents dropped because their id was already stored.
    pub duplicates: u64,
}

impl ImportEngine {
    /// Creates a new engine instance backed by the provided store.
    pub fn new(storage: Arc<TransactionStore>) -> Self {
        Self {
            storage,
            backpressure: 256,
        }
    }

    /// Orchestrates the end-to-end import pipeline for a JSON Lines file.
    ///
    /// A missing or unreadable feed is logged and yields an empty summary
    /// rather than an error, so a caller can treat every run uniformly.
    pub async fn run(&self, path: &str) -> anyhow::Result<ImportSummary> {
        let (sender, receiver) = mpsc::channel::<Value>(self.backpressure);
        let reader_handle = self.spawn_feed_reader(path.to_string(), sender);
        let summary = self.validate_documents(receiver).await;

        if let Err(error) = reader_handle.await {
            error!("Feed ingestion failed: {error}");
        }

        Ok(summary)
    }

    fn spawn_feed_reader(&self, path: String, sender: mpsc::Sender<Value>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening feed at path: {path} | {error}");
                    return;
                }
            };

            for (line_ix, line) in BufReader::new(file).lines().enumerate() {
                let line = match line {
                    Ok(line) => line,
                    Err(error) => {
                        error!("Error reading feed line {} | {error}", line_ix + 1);
                        return;
                    }
                };

                if line.trim().is_empty() {
                    continue;
                }

                match serde_json::from_str::<Value>(&line) {
                    Ok(document) => {
                        if sender.blocking_send(document).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("Undecodable JSON at feed line {} | {error}", line_ix + 1);
                    }
                }
            }
        })
    }

    async fn validate_documents(&self, mut receiver: mpsc::Receiver<Value>) -> ImportSummary {
        let mut summary = ImportSummary::default();

        while let Some(document) = receiver.recv().await {
            match Transaction::parse(&document) {
                Ok(transaction) => {
                    let id = transaction.id;

                    if self.storage.insert(transaction) {
                        summary.accepted += 1;
                        debug!("Transaction [{id}] accepted");
                    } else {
                        summary.duplicates += 1;
                        warn!("Duplicate transaction [{id}] dropped");
                    }
                }
                Err(error) => {
                    summary.rejected += 1;
                    warn!("{error}");
                }
            }
        }

        summary
    }
}
