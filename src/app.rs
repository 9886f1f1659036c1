use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, Toast};
use crate::state::notifier::ChannelNotifier;
use aebl_league::export;
use aebl_league::live::{EventCadence, GameStatus, LiveGame, Matchup, Notification, Tick};
use aebl_league::{Conference, League, LeagueError, Team};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Home,
    Teams,
    Standings,
    Schedule,
    Stats,
    Live,
    Search,
    Export,
    Help,
}

/// What the game ticker should do after a live-game action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickerCommand {
    Start,
    Stop,
    Keep,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
    pub league: League,
    /// Team ids in directory order: East then West, best record first.
    pub team_order: Vec<String>,
    pub game: LiveGame<StdRng>,
    notifier: ChannelNotifier,
    matchup_index: usize,
}

impl App {
    pub fn new(settings: AppSettings, notifier: ChannelNotifier) -> Result<Self, LeagueError> {
        let league = League::aebl();
        let team_order = Conference::ALL
            .iter()
            .flat_map(|c| league.teams_by_conference(*c))
            .map(|t| t.id.clone())
            .collect();

        let matchup = Matchup::default_for(&league)?;
        let matchup_index = league
            .matches
            .iter()
            .position(|m| m.id == matchup.match_id)
            .unwrap_or_default();

        let seed = settings.seed.unwrap_or_else(rand::random);
        info!("live game seed {seed}");
        let game = LiveGame::new(matchup, StdRng::seed_from_u64(seed), EventCadence::default());

        log::set_max_level(settings.log_level);
        tui_logger::set_default_level(settings.log_level);

        Ok(Self {
            state: AppState::new(),
            settings,
            league,
            team_order,
            game,
            notifier,
            matchup_index,
        })
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
        self.state.last_error = None;
        if next == MenuItem::Schedule {
            self.state.schedule.scroll_offset = 0;
        }
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    pub fn dismiss_intro(&mut self) {
        self.state.show_intro = false;
    }

    pub fn advance_animation(&mut self, frame_count: usize) {
        self.state.animation.advance(frame_count);
    }

    pub fn on_error(&mut self, message: String) {
        warn!("{message}");
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Notifications
    // -----------------------------------------------------------------------

    pub fn notifications_enabled(&self) -> bool {
        self.notifier.enabled()
    }

    pub fn toggle_notifications(&mut self) {
        let enabled = !self.notifier.enabled();
        self.notifier.set_enabled(enabled);
        self.settings.notifications = enabled;
        info!("score notifications {}", if enabled { "on" } else { "off" });
    }

    pub fn on_notification(&mut self, notification: Notification) {
        self.state.toast = Some(Toast::from(notification));
    }

    // -----------------------------------------------------------------------
    // Teams
    // -----------------------------------------------------------------------

    pub fn selected_team(&self) -> Option<&Team> {
        self.team_order
            .get(self.state.teams.selected)
            .and_then(|id| self.league.team_by_id(id))
    }

    pub fn team_down(&mut self) {
        let max = self.team_order.len().saturating_sub(1);
        self.state.teams.selected = (self.state.teams.selected + 1).min(max);
    }

    pub fn team_up(&mut self) {
        self.state.teams.selected = self.state.teams.selected.saturating_sub(1);
    }

    // -----------------------------------------------------------------------
    // Schedule / stats
    // -----------------------------------------------------------------------

    pub fn schedule_cycle_filter(&mut self) {
        self.state.schedule.filter = self.state.schedule.filter.next();
        self.state.schedule.scroll_offset = 0;
    }

    pub fn schedule_scroll_down(&mut self) {
        self.state.schedule.scroll_offset = self.state.schedule.scroll_offset.saturating_add(1);
    }

    pub fn schedule_scroll_up(&mut self) {
        self.state.schedule.scroll_offset = self.state.schedule.scroll_offset.saturating_sub(1);
    }

    pub fn stats_cycle_category(&mut self) {
        self.state.stats.category = self.state.stats.category.next();
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    pub fn search_begin(&mut self) {
        self.state.search.composing = true;
    }

    pub fn search_end(&mut self) {
        self.state.search.composing = false;
    }

    pub fn search_input(&mut self, ch: char) {
        self.state.search.push(ch);
    }

    pub fn search_backspace(&mut self) {
        self.state.search.pop();
    }

    pub fn search_clear(&mut self) {
        self.state.search.query.clear();
    }

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------

    /// Write the selected dataset in the selected format to the export directory.
    pub fn export_selected(&mut self) {
        let dataset = self.state.export.dataset();
        let format = self.state.export.format();
        match export::write(&self.league, dataset, format, &self.settings.export_dir) {
            Ok(path) => {
                self.state.last_error = None;
                self.state.toast = Some(Toast {
                    title: format!("Exported {}", dataset.title()),
                    body: path.display().to_string(),
                    at: chrono::Local::now(),
                });
                self.state.export.last_written = Some(path);
            }
            Err(e) => self.on_error(format!("Export failed: {e}")),
        }
    }

    // -----------------------------------------------------------------------
    // Live game
    // -----------------------------------------------------------------------

    pub fn live_start(&mut self) -> TickerCommand {
        if self.game.start() {
            TickerCommand::Start
        } else {
            TickerCommand::Keep
        }
    }

    pub fn live_pause(&mut self) -> TickerCommand {
        if self.game.pause() {
            TickerCommand::Stop
        } else {
            TickerCommand::Keep
        }
    }

    pub fn live_resume(&mut self) -> TickerCommand {
        if self.game.resume() {
            TickerCommand::Start
        } else {
            TickerCommand::Keep
        }
    }

    pub fn live_reset(&mut self) -> TickerCommand {
        self.game.reset();
        TickerCommand::Stop
    }

    pub fn live_next_matchup(&mut self) -> bool {
        self.shift_matchup(1)
    }

    pub fn live_prev_matchup(&mut self) -> bool {
        let len = self.league.matches.len();
        self.shift_matchup(len.saturating_sub(1))
    }

    fn shift_matchup(&mut self, step: usize) -> bool {
        let len = self.league.matches.len();
        if len == 0 || self.game.state().status != GameStatus::NotStarted {
            return false;
        }
        let index = (self.matchup_index + step) % len;
        match Matchup::from_match(&self.league, &self.league.matches[index]) {
            Ok(matchup) => {
                self.matchup_index = index;
                self.game.set_matchup(matchup)
            }
            Err(e) => {
                self.on_error(e.to_string());
                false
            }
        }
    }

    /// Advance the simulation by one second.
    pub fn on_game_tick(&mut self) -> TickerCommand {
        match self.game.tick(&self.notifier) {
            Tick::Finished => TickerCommand::Stop,
            Tick::Running | Tick::Idle => TickerCommand::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::messages::UiEvent;
    use tokio::sync::mpsc;

    fn app() -> (App, mpsc::Receiver<UiEvent>) {
        let (tx, rx) = mpsc::channel(4096);
        let settings = AppSettings {
            seed: Some(7),
            ..AppSettings::default()
        };
        let app = App::new(settings, ChannelNotifier::new(tx, true)).unwrap();
        (app, rx)
    }

    #[test]
    fn help_returns_to_previous_tab() {
        let (mut app, _rx) = app();
        app.update_tab(MenuItem::Stats);
        app.update_tab(MenuItem::Help);
        app.exit_help();
        assert_eq!(app.state.active_tab, MenuItem::Stats);
    }

    #[test]
    fn team_directory_is_east_then_west() {
        let (mut app, _rx) = app();
        assert_eq!(app.team_order.len(), 8);
        assert_eq!(app.selected_team().unwrap().name, "Cairo Pharaohs");
        app.team_up();
        assert_eq!(app.state.teams.selected, 0);
        for _ in 0..20 {
            app.team_down();
        }
        assert_eq!(app.state.teams.selected, 7);
        assert_eq!(app.selected_team().unwrap().conference, Conference::West);
    }

    #[test]
    fn live_controls_map_to_ticker_commands() {
        let (mut app, _rx) = app();
        assert_eq!(app.live_pause(), TickerCommand::Keep);
        assert_eq!(app.live_start(), TickerCommand::Start);
        assert_eq!(app.live_start(), TickerCommand::Keep);
        assert_eq!(app.live_pause(), TickerCommand::Stop);
        assert_eq!(app.live_pause(), TickerCommand::Keep);
        assert_eq!(app.live_resume(), TickerCommand::Start);
        assert_eq!(app.live_reset(), TickerCommand::Stop);
        assert_eq!(app.game.state().status, GameStatus::NotStarted);
    }

    #[test]
    fn full_game_stops_the_ticker_once() {
        let (mut app, _rx) = app();
        app.live_start();
        let mut stops = 0;
        for _ in 0..3000 {
            if app.on_game_tick() == TickerCommand::Stop {
                stops += 1;
            }
        }
        assert_eq!(stops, 1);
        assert_eq!(app.game.state().status, GameStatus::Finished);
    }

    #[test]
    fn score_alerts_reach_the_ui_channel() {
        let (mut app, mut rx) = app();
        app.live_start();
        for _ in 0..2880 {
            app.on_game_tick();
        }
        let mut alerts = 0;
        while let Ok(UiEvent::Notification(n)) = rx.try_recv() {
            assert_eq!(n.tag, "score-update");
            alerts += 1;
        }
        let scores = app
            .game
            .state()
            .events
            .iter()
            .filter(|e| e.points.is_some())
            .count();
        assert_eq!(alerts, scores);
    }

    #[test]
    fn muted_notifications_leave_the_game_untouched() {
        let (mut loud, _a) = app();
        let (mut quiet, mut rx) = app();
        quiet.toggle_notifications();
        assert!(!quiet.notifications_enabled());
        loud.live_start();
        quiet.live_start();
        for _ in 0..1500 {
            loud.on_game_tick();
            quiet.on_game_tick();
        }
        assert_eq!(loud.game.state().home_score, quiet.game.state().home_score);
        assert_eq!(loud.game.state().away_score, quiet.game.state().away_score);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn matchup_changes_only_before_tip_off() {
        let (mut app, _rx) = app();
        assert_eq!(app.game.matchup().match_id, "match-5");
        assert!(app.live_next_matchup());
        assert_eq!(app.game.matchup().match_id, "match-6");
        assert!(app.live_prev_matchup());
        assert!(app.live_prev_matchup());
        assert_eq!(app.game.matchup().match_id, "match-4");

        app.live_start();
        assert!(!app.live_next_matchup());
        assert_eq!(app.game.matchup().match_id, "match-4");
    }

    #[test]
    fn notification_becomes_toast() {
        let (mut app, _rx) = app();
        app.on_notification(Notification {
            title: "Lagos Lions scores!".into(),
            body: "2 - 0".into(),
            tag: "score-update".into(),
        });
        assert_eq!(app.state.toast.as_ref().unwrap().title, "Lagos Lions scores!");
    }

    #[test]
    fn export_writes_selected_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _rx) = app();
        app.settings.export_dir = dir.path().join("out");
        app.state.export.next_format();
        app.export_selected();
        let written = app.state.export.last_written.clone().unwrap();
        assert_eq!(written, dir.path().join("out").join("aebl_teams.txt"));
        assert!(written.exists());
        assert!(app.state.last_error.is_none());
    }

    #[test]
    fn search_editing() {
        let (mut app, _rx) = app();
        app.search_begin();
        for ch in "lionz".chars() {
            app.search_input(ch);
        }
        app.search_backspace();
        app.search_end();
        assert_eq!(app.state.search.query, "lion");
        assert!(!app.state.search.composing);
        app.search_clear();
        assert!(app.state.search.query.is_empty());
    }
}
