//! Worker pool for scanning ROM files concurrently.
//!
//! Spawns N persistent tokio tasks that pull work items from a bounded
//! `async-channel`. Its `Receiver` is `Clone`, so every worker owns a handle
//! and no `Mutex` sits between them. Results go to an unbounded channel and
//! arrive in completion order, not submission order.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Per-item safety net. Header parsing reads at most a few KiB, so only a
/// stalled network mount gets anywhere near this.
const ITEM_TIMEOUT: Duration = Duration::from_secs(60);

/// A pool of worker tasks that process items concurrently.
///
/// An item whose future exceeds [`ITEM_TIMEOUT`] is dropped without a
/// result, so callers that need one result per input must fill the gaps.
pub struct WorkerPool<R: Send + 'static> {
    result_rx: mpsc::UnboundedReceiver<R>,
    _handles: Vec<JoinHandle<()>>,
}

impl<R: Send + 'static> WorkerPool<R> {
    /// Spawn `n` workers (at least one) and queue every item.
    ///
    /// Submission runs in its own task so the caller can start draining
    /// results right away.
    pub fn start<W, F, Fut>(n: usize, items: Vec<W>, process_fn: F) -> Self
    where
        W: Send + 'static,
        F: Fn(W) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let n = n.max(1);
        let (work_tx, work_rx) = async_channel::bounded::<W>(n);
        let (result_tx, result_rx) = mpsc::unbounded_channel::<R>();
        let process_fn = Arc::new(process_fn);

        let handles: Vec<JoinHandle<()>> = (0..n)
            .map(|worker| {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                let process_fn = process_fn.clone();
                tokio::spawn(async move {
                    while let Ok(item) = work_rx.recv().await {
                        match tokio::time::timeout(ITEM_TIMEOUT, process_fn(item)).await {
                            Ok(r) => {
                                if result_tx.send(r).is_err() {
                                    break; // receiver dropped
                                }
                            }
                            Err(_) => {
                                log::warn!(
                                    "worker {}: item timed out after {}s, skipping",
                                    worker,
                                    ITEM_TIMEOUT.as_secs()
                                );
                            }
                        }
                    }
                })
            })
            .collect();

        // Channel closes once every worker has finished
        drop(result_tx);

        tokio::spawn(async move {
            for item in items {
                if work_tx.send(item).await.is_err() {
                    break;
                }
            }
        });

        Self {
            result_rx,
            _handles: handles,
        }
    }

    /// Next result, or `None` once every worker has shut down.
    pub async fn recv(&mut self) -> Option<R> {
        self.result_rx.recv().await
    }
}
