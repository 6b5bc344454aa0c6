//! Interval timer - delivers `Tick` messages on a fixed period
//!
//! The timer task owns no application state. Cancelling it aborts the task,
//! so no tick is produced after `cancel` returns.

use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// One firing of the periodic timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Handle to a running interval. Dropping it cancels the timer.
pub struct IntervalHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl IntervalHandle {
    /// Stop the timer immediately
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
            self.task.abort();
            tracing::debug!("Interval cancelled");
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn a timer firing every `period`, first firing one period from now
pub fn spawn_interval(period: Duration, tick_tx: mpsc::UnboundedSender<Tick>) -> IntervalHandle {
    let (cancel_tx, mut cancel_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = &mut cancel_rx => break,
                _ = interval.tick() => {
                    if tick_tx.send(Tick).is_err() {
                        // Receiver gone, nobody to tick for
                        break;
                    }
                }
            }
        }
    });

    IntervalHandle {
        cancel_tx: Some(cancel_tx),
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<Tick>) -> usize {
        let mut n = 0;
        while rx.try_recv().is_ok() {
            n += 1;
        }
        n
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _handle = spawn_interval(Duration::from_secs(1), tx);

        // Nothing before the first period elapses
        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(drain(&mut rx), 0);

        time::sleep(Duration::from_millis(2600)).await;
        assert_eq!(drain(&mut rx), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_firing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_interval(Duration::from_secs(1), tx);

        time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(drain(&mut rx), 2);

        handle.cancel();
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(drain(&mut rx), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(spawn_interval(Duration::from_secs(1), tx));

        time::sleep(Duration::from_secs(3)).await;
        assert_eq!(drain(&mut rx), 0);
    }
}
