/// Background expiry sweep
///
/// Runs on a fixed period regardless of request traffic and stops when its
/// handle is told to, so tests and shutdown never leak the timer.
use super::manager::CacheStore;
use crate::logger::{self, LogTag};
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// How long `stop` waits for the task to finish
const STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// Owner of a running sweep task
pub struct SweepHandle {
    shutdown: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl SweepHandle {
    /// Signal the task and wait for it to exit
    pub async fn stop(self) {
        // notify_one stores a permit, so a signal sent while the task is mid-sweep is not lost
        self.shutdown.notify_one();
        if tokio::time::timeout(STOP_TIMEOUT, self.handle).await.is_err() {
            logger::warning(LogTag::Cache, "Cache sweeper did not stop in time");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawn the periodic sweep for `cache`
///
/// Must be called from within a tokio runtime.
pub fn start_sweeper<K, V>(cache: Arc<CacheStore<K, V>>, interval: Duration) -> SweepHandle
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let shutdown = Arc::new(Notify::new());
    let signal = Arc::clone(&shutdown);

    let handle = tokio::spawn(async move {
        logger::debug(
            LogTag::Cache,
            &format!("Cache sweeper started (every {}s)", interval.as_secs()),
        );

        loop {
            tokio::select! {
                _ = signal.notified() => {
                    logger::debug(LogTag::Cache, "Cache sweeper stopping");
                    break;
                }

                _ = sleep(interval) => {
                    let removed = cache.sweep();
                    if removed > 0 {
                        logger::debug(
                            LogTag::Cache,
                            &format!("🧹 Swept {} expired entries ({} remain)", removed, cache.len()),
                        );
                    }
                }
            }
        }
    });

    SweepHandle { shutdown, handle }
}
