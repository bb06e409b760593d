use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

/// Repeating task that calls `on_tick` once per `period`, starting one period from now.
///
/// Dropping the ticker aborts the task; a pending tick is discarded.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let handle = tokio::spawn(async move {
            loop {
                interval.tick().await;
                on_tick();
            }
        });

        Self { handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
