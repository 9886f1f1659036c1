use crate::app::MenuItem;
use aebl_league::export::{Dataset, Format};
use aebl_league::live::Notification;
use aebl_league::schedule::ScheduleFilter;
use aebl_league::stats::StatCategory;
use chrono::{DateTime, Local};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Banner animation state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AnimationState {
    /// Current frame index into the banner frames, wraps at FRAME_COUNT.
    pub frame: usize,
    /// Monotonic tick counter, drives the bouncing ball.
    pub tick: u64,
}

impl AnimationState {
    pub fn advance(&mut self, frame_count: usize) {
        self.tick = self.tick.wrapping_add(1);
        self.frame = (self.frame + 1) % frame_count.max(1);
    }
}

// ---------------------------------------------------------------------------
// Per-tab state
// ---------------------------------------------------------------------------

/// Selection in the team directory. Indexes into `App::team_order`.
#[derive(Debug, Default)]
pub struct TeamsState {
    pub selected: usize,
}

#[derive(Debug, Default)]
pub struct ScheduleState {
    pub filter: ScheduleFilter,
    pub scroll_offset: u16,
}

#[derive(Debug, Default)]
pub struct StatsState {
    pub category: StatCategory,
}

#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    /// While set, every key goes into the query.
    pub composing: bool,
}

impl SearchState {
    pub fn push(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn pop(&mut self) {
        self.query.pop();
    }
}

#[derive(Debug, Default)]
pub struct ExportState {
    pub dataset: usize,
    pub format: usize,
    pub last_written: Option<PathBuf>,
}

impl ExportState {
    pub fn dataset(&self) -> Dataset {
        Dataset::ALL[self.dataset % Dataset::ALL.len()]
    }

    pub fn format(&self) -> Format {
        Format::ALL[self.format % Format::ALL.len()]
    }

    pub fn next_dataset(&mut self) {
        self.dataset = (self.dataset + 1) % Dataset::ALL.len();
    }

    pub fn prev_dataset(&mut self) {
        self.dataset = (self.dataset + Dataset::ALL.len() - 1) % Dataset::ALL.len();
    }

    pub fn next_format(&mut self) {
        self.format = (self.format + 1) % Format::ALL.len();
    }
}

// ---------------------------------------------------------------------------
// Toasts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub at: DateTime<Local>,
}

impl From<Notification> for Toast {
    fn from(n: Notification) -> Self {
        Self {
            title: n.title,
            body: n.body,
            at: Local::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_intro: bool,
    pub show_logs: bool,
    pub animation: AnimationState,
    pub teams: TeamsState,
    pub schedule: ScheduleState,
    pub stats: StatsState,
    pub search: SearchState,
    pub export: ExportState,
    pub toast: Option<Toast>,
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_tab: MenuItem::default(),
            previous_tab: MenuItem::default(),
            show_intro: true,
            show_logs: false,
            animation: AnimationState::default(),
            teams: TeamsState::default(),
            schedule: ScheduleState::default(),
            stats: StatsState::default(),
            search: SearchState::default(),
            export: ExportState::default(),
            toast: None,
            last_error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_wraps_frames() {
        let mut anim = AnimationState::default();
        for _ in 0..5 {
            anim.advance(4);
        }
        assert_eq!(anim.frame, 1);
        assert_eq!(anim.tick, 5);
    }

    #[test]
    fn export_selection_cycles_both_ways() {
        let mut export = ExportState::default();
        assert_eq!(export.dataset(), Dataset::Teams);
        export.prev_dataset();
        assert_eq!(export.dataset(), Dataset::Standings);
        export.next_dataset();
        export.next_dataset();
        assert_eq!(export.dataset(), Dataset::Players);
        export.next_format();
        assert_eq!(export.format(), Format::Report);
        export.next_format();
        assert_eq!(export.format(), Format::Csv);
    }

    #[test]
    fn toast_keeps_notification_text() {
        let toast = Toast::from(Notification {
            title: "Cairo Pharaohs scores!".into(),
            body: "3 - 0".into(),
            tag: "score-update".into(),
        });
        assert_eq!(toast.title, "Cairo Pharaohs scores!");
        assert_eq!(toast.body, "3 - 0");
    }
}
