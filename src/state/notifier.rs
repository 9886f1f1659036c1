use crate::state::messages::UiEvent;
use aebl_league::live::{Notification, Notifier, NotifyError};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Delivers score alerts to the UI loop, which shows them as toasts.
///
/// Never blocks the simulator: a full queue drops the alert.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    events: mpsc::Sender<UiEvent>,
    enabled: bool,
}

impl ChannelNotifier {
    pub fn new(events: mpsc::Sender<UiEvent>, enabled: bool) -> Self {
        Self { events, enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        if !self.enabled {
            return Err(NotifyError::Disabled);
        }
        self.events
            .try_send(UiEvent::Notification(notification.clone()))
            .map_err(|e| match e {
                TrySendError::Full(_) => NotifyError::Full,
                TrySendError::Closed(_) => NotifyError::Closed,
            })
    }
}
