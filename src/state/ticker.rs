use crate::state::messages::UiEvent;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Drives the live game clock: one `GameTick` per period while running.
///
/// Every start and stop bumps the epoch. A tick is only acted on if its epoch
/// is still current, so a pause or reset takes effect even when ticks from the
/// previous run are already sitting in the channel.
pub struct GameTicker {
    events: mpsc::Sender<UiEvent>,
    period: Duration,
    epoch: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl GameTicker {
    pub fn new(events: mpsc::Sender<UiEvent>, period: Duration) -> Self {
        Self {
            events,
            period,
            epoch: Arc::new(AtomicU64::new(0)),
            handle: None,
        }
    }

    /// Start a new run, cancelling any previous one. Must be called from
    /// inside a tokio runtime.
    pub fn start(&mut self) {
        self.stop();
        let epoch = self.epoch.load(Ordering::SeqCst);
        let current = Arc::clone(&self.epoch);
        let events = self.events.clone();
        let period = self.period;

        self.handle = Some(tokio::spawn(async move {
            let mut ticks = interval(period);
            // The first tick completes immediately; the clock starts one period in.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                if current.load(Ordering::SeqCst) != epoch {
                    break;
                }
                if events.send(UiEvent::GameTick { epoch }).await.is_err() {
                    break;
                }
            }
        }));
        log::debug!("game ticker started (epoch {epoch})");
    }

    pub fn stop(&mut self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::debug!("game ticker stopped");
        }
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.handle.is_some() && self.epoch.load(Ordering::SeqCst) == epoch
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for GameTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
