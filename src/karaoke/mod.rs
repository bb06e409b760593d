pub mod ticker;

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tracing::debug;

use self::ticker::Ticker;

pub const RUNNING_LABEL: &str = "IT'S KARAOKE TIME!!! 🎤 🎶";
pub const IDLE_LABEL: &str = "Press Enter to start karaoke";
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Default)]
pub struct KaraokeSession {
    elapsed: Arc<AtomicU64>,
    ticker: Option<Ticker>,
}

impl KaraokeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn elapsed_count(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }

    pub fn label(&self) -> &'static str {
        if self.is_running() {
            RUNNING_LABEL
        } else {
            IDLE_LABEL
        }
    }

    /// Must be called from within a tokio runtime when turning the session on.
    pub fn toggle(&mut self) -> bool {
        if self.ticker.take().is_some() {
            debug!("Karaoke stopped at {}s", self.elapsed_count());
            return false;
        }

        self.elapsed.store(0, Ordering::Relaxed);
        let elapsed = self.elapsed.clone();
        self.ticker = Some(Ticker::start(TICK_PERIOD, move || {
            elapsed.fetch_add(1, Ordering::Relaxed);
        }));
        debug!("Karaoke started");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn let_time_pass(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_counts_once_per_second_while_running() {
        let mut session = KaraokeSession::new();
        assert!(!session.is_running());
        assert_eq!(session.elapsed_count(), 0);
        assert_eq!(session.label(), IDLE_LABEL);

        assert!(session.toggle());
        assert_eq!(session.label(), RUNNING_LABEL);

        let_time_pass(Duration::from_millis(3_500)).await;
        assert_eq!(session.elapsed_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_off_freezes_count() {
        let mut session = KaraokeSession::new();
        session.toggle();
        let_time_pass(Duration::from_millis(3_500)).await;

        assert!(!session.toggle());
        assert_eq!(session.elapsed_count(), 3);
        assert_eq!(session.label(), IDLE_LABEL);

        let_time_pass(Duration::from_secs(10)).await;
        assert_eq!(session.elapsed_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_partial_tick_carried_over() {
        let mut session = KaraokeSession::new();
        session.toggle();
        let_time_pass(Duration::from_millis(1_900)).await;
        session.toggle();
        assert_eq!(session.elapsed_count(), 1);

        session.toggle();
        assert_eq!(session.elapsed_count(), 0);
        let_time_pass(Duration::from_millis(500)).await;
        assert_eq!(session.elapsed_count(), 0);
        let_time_pass(Duration::from_millis(600)).await;
        assert_eq!(session.elapsed_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticker() {
        let mut session = KaraokeSession::new();
        session.toggle();
        let elapsed = session.elapsed.clone();
        drop(session);

        let_time_pass(Duration::from_secs(5)).await;
        assert_eq!(elapsed.load(Ordering::Relaxed), 0);
    }
}
