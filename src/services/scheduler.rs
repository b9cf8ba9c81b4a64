use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::utils::DashboardError;

/// Run a fetch cycle on a fixed interval.
///
/// The first cycle runs immediately; afterwards one cycle runs per tick.
/// Timers are independent of each other and a slow cycle delays only its own
/// next tick. Cycle errors are logged here and never propagate: the design
/// favors a stale snapshot over a dead producer, and the next tick retries.
pub fn spawn_periodic<F, Fut>(name: &'static str, period: Duration, mut cycle: F) -> JoinHandle<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), DashboardError>> + Send,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            debug!("running {} cycle", name);
            if let Err(e) = cycle().await {
                warn!("{} cycle failed: {}", name, e);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_runs_cycle_immediately_and_again_on_tick() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let handle = spawn_periodic("test", Duration::from_millis(20), move || {
            let count = count_clone.clone();
            async move {
                count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        });

        tokio::time::sleep(Duration::from_millis(70)).await;
        handle.abort();

        // First run is immediate, then roughly every 20ms.
        assert!(count.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn test_cycle_error_does_not_stop_the_timer() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let handle = spawn_periodic("failing", Duration::from_millis(10), move || {
            let count = count_clone.clone();
            async move {
                count.fetch_add(1, Ordering::SeqCst);
                Err(DashboardError::Malformed("boom".to_string()))
            }
        });

        tokio::time::sleep(Duration::from_millis(55)).await;
        handle.abort();

        assert!(count.load(Ordering::SeqCst) >= 3);
    }
}
