use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, timeout, Instant};
use tracing::{info, warn};

/// Recurring timer: runs the job immediately, then one period after each
/// run finishes.
///
/// Runs never overlap. A slow run pushes the next one back by however long
/// it took; there are no catch-up runs.
pub struct Scheduler {
    period: Duration,
}

pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl Scheduler {
    /// Panics on a zero period; `Config::load` rejects one before it gets here.
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "scheduler period must be non-zero");
        Self { period }
    }

    pub fn start<F, Fut>(self, mut job: F) -> SchedulerHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut next_run = Instant::now();

            loop {
                tokio::select! {
                    biased;
                    // Fires on stop() and when the handle is dropped.
                    _ = shutdown_rx.changed() => break,
                    _ = sleep_until(next_run) => {}
                }

                job().await;
                next_run = Instant::now() + period;
            }

            info!("Scheduler stopped");
        });

        SchedulerHandle { shutdown, task }
    }
}

impl SchedulerHandle {
    /// Ask the loop to stop and wait up to `grace` for an in-flight run.
    pub async fn stop(self, grace: Duration) {
        let _ = self.shutdown.send(true);

        let abort = self.task.abort_handle();
        match timeout(grace, self.task).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Scheduler task ended abnormally: {}", e),
            Err(_) => {
                warn!("Running cycle did not finish within {:?}, aborting", grace);
                abort.abort();
            }
        }
    }
}
