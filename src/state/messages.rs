use aebl_league::live::Notification;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    AnimationTick,
    /// One simulated second. Carries the ticker run it came from so ticks
    /// queued before a pause or reset can be told apart.
    GameTick { epoch: u64 },
    Notification(Notification),
}
