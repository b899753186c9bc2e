use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use tracing::error;

use crate::clients::{QueueClient, Summarizer};

/// Consecutive failures tolerated before the loop stops itself. Zero means
/// the first failure of any kind is fatal.
const MAX_FAILS: u32 = 0;

/// Where successful summaries go, one line per message.
pub trait SummarySink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Writes each summary to standard output. Diagnostics go to stderr via
/// `tracing`, so stdout carries nothing but summaries.
pub struct StdoutSink;

impl SummarySink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// Drives the receive → summarize → emit cycle until signalled to stop or
/// until the failure budget is exhausted.
///
/// Exactly one `run` is expected per instance, on its own spawned task. The
/// stop flag and liveness flag are the only state shared with the
/// controlling task.
pub struct Processor {
    queue: Arc<dyn QueueClient>,
    summarizer: Arc<dyn Summarizer>,
    queue_name: String,
    sink: Arc<dyn SummarySink>,
    stop: AtomicBool,
    active: AtomicBool,
    // Cumulative for the life of the loop; a success does not reset it.
    failures: AtomicU32,
}

impl Processor {
    /// Construction performs no I/O.
    pub fn new(
        queue: Arc<dyn QueueClient>,
        summarizer: Arc<dyn Summarizer>,
        queue_name: String,
        sink: Arc<dyn SummarySink>,
    ) -> Self {
        Self {
            queue,
            summarizer,
            queue_name,
            sink,
            stop: AtomicBool::new(false),
            active: AtomicBool::new(false),
            failures: AtomicU32::new(0),
        }
    }

    /// The main execution loop. Each iteration receives one message from the
    /// queue, asks the summarizer for a one-line summary, and emits it. Poll
    /// misses loop straight back around; every other failure is counted
    /// against the budget and the iteration is abandoned. Errors never
    /// propagate out of `run` — the loop either continues or stops itself.
    pub async fn run(&self) {
        self.active.store(true, Ordering::SeqCst);
        while !self.stop.load(Ordering::SeqCst) {
            self.iteration().await;
        }
        self.active.store(false, Ordering::SeqCst);
    }

    async fn iteration(&self) {
        let message = match self.queue.receive(&self.queue_name).await {
            Ok(Some(message)) => message,
            Ok(None) => {
                // Poll miss. Yield so a stop signal from the controlling
                // task is observed promptly on an idle queue.
                tokio::task::yield_now().await;
                return;
            }
            Err(e) => {
                error!("Failed to receive message: {}", e);
                self.record_failure();
                return;
            }
        };

        match self.summarizer.summarize(&message).await {
            Ok(summary) if !summary.is_empty() => self.sink.emit(&summary),
            Ok(_) => {
                error!("Summarizer returned an empty result");
                self.record_failure();
            }
            Err(e) => {
                error!("Failed to summarize message: {}", e);
                self.record_failure();
            }
        }
    }

    fn record_failure(&self) {
        let count = self.failures.fetch_add(1, Ordering::SeqCst) + 1;
        if count > MAX_FAILS {
            error!("Failed too many times. Quitting");
            self.stop.store(true, Ordering::SeqCst);
        }
    }

    /// Signals the loop to stop gracefully. Observed at the next iteration
    /// boundary; an in-flight receive or summarize call is not interrupted.
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Whether the execution loop is currently running.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}
