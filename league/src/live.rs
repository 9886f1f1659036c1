//! Simulated live game: a four-quarter clock that produces random
//! play-by-play while it runs.
//!
//! [`LiveGame`] owns the only mutable game state. It is advanced one second at
//! a time by [`LiveGame::tick`] and driven through the
//! `not_started -> live <-> paused -> finished` lifecycle by the control
//! methods. All randomness comes from the injected [`Rng`] and timestamps from
//! the injected [`Clock`], so a seeded game is fully reproducible.

use crate::{League, LeagueError, Match, MatchStatus, Team};
use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;
use std::collections::VecDeque;
use thiserror::Error;

/// Seconds in one quarter.
pub const QUARTER_SECONDS: u32 = 12 * 60;
pub const QUARTERS: u8 = 4;

/// Source of event and update timestamps.
pub type Clock = fn() -> DateTime<Utc>;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Live,
    Paused,
    Finished,
}

impl GameStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "Not started",
            GameStatus::Live => "LIVE",
            GameStatus::Paused => "Paused",
            GameStatus::Finished => "Final",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Score,
    Foul,
    Timeout,
    Substitution,
    QuarterEnd,
}

/// Kinds the random generator draws from. Quarter ends come from the clock.
const RANDOM_KINDS: [EventKind; 4] = [
    EventKind::Score,
    EventKind::Foul,
    EventKind::Timeout,
    EventKind::Substitution,
];

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Score => "Score",
            EventKind::Foul => "Foul",
            EventKind::Timeout => "Timeout",
            EventKind::Substitution => "Sub",
            EventKind::QuarterEnd => "Buzzer",
        }
    }

    /// Play-by-play descriptions for this kind. Never empty.
    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            EventKind::Score => &[
                "Fast break layup",
                "Three-pointer from downtown",
                "Mid-range jumper",
                "Free throw",
                "Slam dunk",
                "Step-back three",
                "Alley-oop finish",
            ],
            EventKind::Foul => &[
                "Personal foul called",
                "Shooting foul",
                "Defensive foul",
                "Offensive foul",
            ],
            EventKind::Timeout => &["Timeout called", "TV timeout", "Official timeout"],
            EventKind::Substitution => &["Player substitution", "Lineup change"],
            EventKind::QuarterEnd => &["End of quarter"],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameEvent {
    pub id: String,
    pub kind: EventKind,
    pub side: Side,
    pub description: String,
    /// Points awarded; only set on score events.
    pub points: Option<u8>,
    pub timestamp: DateTime<Utc>,
    pub quarter: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub home_score: u32,
    pub away_score: u32,
    /// 1..=4
    pub quarter: u8,
    /// Seconds left in the quarter, 0..=QUARTER_SECONDS.
    pub time_remaining: u32,
    pub status: GameStatus,
    /// Newest first.
    pub events: VecDeque<GameEvent>,
    pub last_update: DateTime<Utc>,
}

impl GameState {
    fn fresh(status: GameStatus, now: DateTime<Utc>) -> Self {
        Self {
            home_score: 0,
            away_score: 0,
            quarter: 1,
            time_remaining: QUARTER_SECONDS,
            status,
            events: VecDeque::new(),
            last_update: now,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    /// Game clock as `M:SS`.
    pub fn clock_label(&self) -> String {
        format!("{}:{:02}", self.time_remaining / 60, self.time_remaining % 60)
    }

    /// Fraction of the quarter still to play, in [0, 1].
    pub fn clock_progress(&self) -> f64 {
        f64::from(self.time_remaining) / f64::from(QUARTER_SECONDS)
    }

    pub fn leader(&self) -> Option<Side> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Winning side once the game is over. `None` while playing or on a tie.
    pub fn winner(&self) -> Option<Side> {
        if self.status != GameStatus::Finished {
            return None;
        }
        self.leader()
    }
}

// ---------------------------------------------------------------------------
// Event cadence
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum CadenceError {
    #[error("event probability must be within [0, 1], got {0}")]
    Probability(f64),
    #[error("event interval must be at least one second")]
    ZeroInterval,
}

/// When random events are generated: on clock readings that are a multiple
/// of `interval_secs`, each with chance `probability`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventCadence {
    probability: f64,
    interval_secs: u32,
}

impl Default for EventCadence {
    fn default() -> Self {
        Self { probability: 0.15, interval_secs: 30 }
    }
}

impl EventCadence {
    pub fn new(probability: f64, interval_secs: u32) -> Result<Self, CadenceError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(CadenceError::Probability(probability));
        }
        if interval_secs == 0 {
            return Err(CadenceError::ZeroInterval);
        }
        Ok(Self { probability, interval_secs })
    }

    /// A cadence that never generates events.
    pub fn silent() -> Self {
        Self { probability: 0.0, ..Self::default() }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
    }

    fn fires<R: Rng>(&self, time_remaining: u32, rng: &mut R) -> bool {
        time_remaining % self.interval_secs == 0 && rng.gen_bool(self.probability)
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub tag: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotifyError {
    #[error("notifications are disabled")]
    Disabled,
    #[error("notification queue is full")]
    Full,
    #[error("notification sink is closed")]
    Closed,
}

/// Fire-and-forget sink for score alerts. Failures never affect the game.
pub trait Notifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Matchup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub match_id: String,
    pub venue: String,
    pub home: Team,
    pub away: Team,
}

impl Matchup {
    pub fn from_match(league: &League, m: &Match) -> Result<Self, LeagueError> {
        let team = |id: &str| {
            league
                .team_by_id(id)
                .cloned()
                .ok_or_else(|| LeagueError::TeamNotFound(id.to_string()))
        };
        Ok(Self {
            match_id: m.id.clone(),
            venue: m.venue.clone(),
            home: team(&m.home_team_id)?,
            away: team(&m.away_team_id)?,
        })
    }

    /// The first scheduled match, or the first match if none is scheduled.
    pub fn default_for(league: &League) -> Result<Self, LeagueError> {
        let m = league
            .matches
            .iter()
            .find(|m| m.status == MatchStatus::Scheduled)
            .or_else(|| league.matches.first())
            .ok_or(LeagueError::NoMatches)?;
        Self::from_match(league, m)
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

// ---------------------------------------------------------------------------
// Simulator
// ---------------------------------------------------------------------------

/// Result of one call to [`LiveGame::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The game was not live; nothing changed.
    Idle,
    Running,
    /// This tick expired the fourth quarter.
    Finished,
}

pub struct LiveGame<R> {
    matchup: Matchup,
    state: GameState,
    rng: R,
    cadence: EventCadence,
    clock: Clock,
    next_event_id: u64,
}

impl<R: Rng> LiveGame<R> {
    pub fn new(matchup: Matchup, rng: R, cadence: EventCadence) -> Self {
        let clock: Clock = Utc::now;
        Self {
            matchup,
            state: GameState::fresh(GameStatus::NotStarted, clock()),
            rng,
            cadence,
            clock,
            next_event_id: 1,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self.state.last_update = clock();
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn matchup(&self) -> &Matchup {
        &self.matchup
    }

    pub fn cadence(&self) -> EventCadence {
        self.cadence
    }

    /// `not_started -> live` with a fresh state. Returns whether the game started.
    pub fn start(&mut self) -> bool {
        if self.state.status != GameStatus::NotStarted {
            return false;
        }
        self.state = GameState::fresh(GameStatus::Live, (self.clock)());
        info!(
            "tip-off: {} vs {}",
            self.matchup.home.name, self.matchup.away.name
        );
        true
    }

    /// `live -> paused`. Values are left untouched.
    pub fn pause(&mut self) -> bool {
        if self.state.status != GameStatus::Live {
            return false;
        }
        self.state.status = GameStatus::Paused;
        info!("game paused at Q{} {}", self.state.quarter, self.state.clock_label());
        true
    }

    /// `paused -> live`, continuing from the frozen clock.
    pub fn resume(&mut self) -> bool {
        if self.state.status != GameStatus::Paused {
            return false;
        }
        self.state.status = GameStatus::Live;
        info!("game resumed at Q{} {}", self.state.quarter, self.state.clock_label());
        true
    }

    /// Back to `not_started` from any state.
    pub fn reset(&mut self) {
        self.state = GameState::fresh(GameStatus::NotStarted, (self.clock)());
        info!("game reset");
    }

    /// Swap in another matchup. Only allowed before tip-off.
    pub fn set_matchup(&mut self, matchup: Matchup) -> bool {
        if self.state.status != GameStatus::NotStarted {
            return false;
        }
        self.matchup = matchup;
        self.reset();
        true
    }

    /// Advance the game clock by one second.
    pub fn tick(&mut self, notifier: &dyn Notifier) -> Tick {
        if self.state.status != GameStatus::Live {
            return Tick::Idle;
        }
        let now = (self.clock)();

        self.state.time_remaining = self.state.time_remaining.saturating_sub(1);
        if self.state.time_remaining == 0 {
            self.end_quarter(now);
        }

        if self.state.status == GameStatus::Live
            && self.cadence.fires(self.state.time_remaining, &mut self.rng)
        {
            let event = self.random_event(now, notifier);
            self.state.events.push_front(event);
        }

        self.state.last_update = now;
        if self.state.status == GameStatus::Finished {
            Tick::Finished
        } else {
            Tick::Running
        }
    }

    fn end_quarter(&mut self, now: DateTime<Utc>) {
        let quarter = self.state.quarter;
        let side = self.state.leader().unwrap_or(Side::Home);
        let description = EventKind::QuarterEnd.catalog()[0].to_string();
        let event = self.event(EventKind::QuarterEnd, side, description, None, now);
        self.state.events.push_front(event);

        if quarter < QUARTERS {
            self.state.quarter += 1;
            self.state.time_remaining = QUARTER_SECONDS;
            debug!("start of Q{}", self.state.quarter);
        } else {
            self.state.status = GameStatus::Finished;
            info!(
                "final: {} {} - {} {}",
                self.matchup.home.name,
                self.state.home_score,
                self.state.away_score,
                self.matchup.away.name
            );
        }
    }

    fn random_event(&mut self, now: DateTime<Utc>, notifier: &dyn Notifier) -> GameEvent {
        let kind = RANDOM_KINDS[self.rng.gen_range(0..RANDOM_KINDS.len())];
        let side = Side::BOTH[self.rng.gen_range(0..Side::BOTH.len())];
        let catalog = kind.catalog();
        let description = catalog[self.rng.gen_range(0..catalog.len())].to_string();

        let points = (kind == EventKind::Score).then(|| self.rng.gen_range(1..=3u8));
        if let Some(points) = points {
            match side {
                Side::Home => self.state.home_score += u32::from(points),
                Side::Away => self.state.away_score += u32::from(points),
            }
            let notification = Notification {
                title: format!("{} scores!", self.matchup.team(side).name),
                body: format!("{} - {}", self.state.home_score, self.state.away_score),
                tag: "score-update".to_string(),
            };
            if let Err(e) = notifier.notify(&notification) {
                debug!("score notification dropped: {e}");
            }
        }

        self.event(kind, side, description, points, now)
    }

    fn event(
        &mut self,
        kind: EventKind,
        side: Side,
        description: String,
        points: Option<u8>,
        now: DateTime<Utc>,
    ) -> GameEvent {
        let id = format!("evt-{}", self.next_event_id);
        self.next_event_id += 1;
        GameEvent {
            id,
            kind,
            side,
            description,
            points,
            timestamp: now,
            quarter: self.state.quarter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::collections::HashSet;

    fn tip_off() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 5, 19, 0, 0).unwrap()
    }

    fn game(seed: u64, cadence: EventCadence) -> LiveGame<StdRng> {
        let league = League::aebl();
        let matchup = Matchup::default_for(&league).unwrap();
        LiveGame::new(matchup, StdRng::seed_from_u64(seed), cadence).with_clock(tip_off)
    }

    fn run(game: &mut LiveGame<StdRng>, ticks: usize, notifier: &dyn Notifier) {
        for _ in 0..ticks {
            game.tick(notifier);
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        seen: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
            self.seen.borrow_mut().push(notification.clone());
            Ok(())
        }
    }

    struct ClosedNotifier;

    impl Notifier for ClosedNotifier {
        fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
            Err(NotifyError::Closed)
        }
    }

    fn assert_fresh(state: &GameState) {
        assert_eq!(state.home_score, 0);
        assert_eq!(state.away_score, 0);
        assert_eq!(state.quarter, 1);
        assert_eq!(state.time_remaining, QUARTER_SECONDS);
        assert_eq!(state.status, GameStatus::NotStarted);
        assert!(state.events.is_empty());
    }

    #[test]
    fn new_game_is_not_started() {
        let g = game(1, EventCadence::default());
        assert_fresh(g.state());
        assert_eq!(g.matchup().match_id, "match-5");
        assert_eq!(g.matchup().home.name, "Cairo Pharaohs");
    }

    #[test]
    fn ticking_before_start_is_a_no_op() {
        let mut g = game(1, EventCadence::default());
        let before = g.state().clone();
        assert_eq!(g.tick(&NullNotifier), Tick::Idle);
        assert_eq!(g.state(), &before);
    }

    #[test]
    fn clock_counts_down_one_second_per_tick() {
        let mut g = game(1, EventCadence::silent());
        assert!(g.start());
        let mut expected = QUARTER_SECONDS;
        for _ in 0..(QUARTER_SECONDS - 1) {
            assert_eq!(g.tick(&NullNotifier), Tick::Running);
            expected -= 1;
            assert_eq!(g.state().time_remaining, expected);
            assert_eq!(g.state().quarter, 1);
        }
    }

    #[test]
    fn full_quarter_advances_to_second_quarter() {
        let mut g = game(1, EventCadence::silent());
        g.start();
        run(&mut g, QUARTER_SECONDS as usize, &NullNotifier);

        let state = g.state();
        assert_eq!(state.quarter, 2);
        assert_eq!(state.time_remaining, QUARTER_SECONDS);
        assert_eq!(state.status, GameStatus::Live);
        assert_eq!(state.home_score, 0);
        assert_eq!(state.away_score, 0);
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].kind, EventKind::QuarterEnd);
        assert_eq!(state.events[0].quarter, 1);
    }

    #[test]
    fn last_second_of_fourth_quarter_finishes_the_game() {
        let mut g = game(1, EventCadence::silent());
        g.start();
        g.state.quarter = 4;
        g.state.time_remaining = 1;

        assert_eq!(g.tick(&NullNotifier), Tick::Finished);
        assert_eq!(g.state().status, GameStatus::Finished);
        assert_eq!(g.state().time_remaining, 0);
        assert_eq!(g.state().quarter, 4);

        let after = g.state().clone();
        assert_eq!(g.tick(&NullNotifier), Tick::Idle);
        assert_eq!(g.state(), &after);
    }

    #[test]
    fn finished_is_terminal_except_for_reset() {
        let mut g = game(1, EventCadence::silent());
        g.start();
        run(&mut g, QUARTER_SECONDS as usize * QUARTERS as usize, &NullNotifier);
        assert_eq!(g.state().status, GameStatus::Finished);
        assert_eq!(g.state().events.len(), QUARTERS as usize);

        assert!(!g.start());
        assert!(!g.pause());
        assert!(!g.resume());
        assert_eq!(g.state().status, GameStatus::Finished);

        g.reset();
        assert_fresh(g.state());
    }

    #[test]
    fn reset_from_every_state_yields_fresh_game() {
        let mut g = game(7, EventCadence::default());
        g.reset();
        assert_fresh(g.state());

        g.start();
        run(&mut g, 500, &NullNotifier);
        g.reset();
        assert_fresh(g.state());

        g.start();
        run(&mut g, 500, &NullNotifier);
        g.pause();
        g.reset();
        assert_fresh(g.state());
    }

    #[test]
    fn pause_then_resume_leaves_state_unchanged() {
        let mut g = game(3, EventCadence::default());
        g.start();
        run(&mut g, 1234, &NullNotifier);
        let before = g.state().clone();

        assert!(g.pause());
        assert_eq!(g.tick(&NullNotifier), Tick::Idle);
        assert!(g.resume());
        assert_eq!(g.state(), &before);
    }

    #[test]
    fn pausing_twice_is_idempotent() {
        let mut g = game(3, EventCadence::default());
        g.start();
        run(&mut g, 90, &NullNotifier);
        assert!(g.pause());
        let once = g.state().clone();
        assert!(!g.pause());
        assert_eq!(g.state(), &once);
    }

    #[test]
    fn controls_outside_their_source_state_are_no_ops() {
        let mut g = game(3, EventCadence::default());
        assert!(!g.pause());
        assert!(!g.resume());
        g.start();
        assert!(!g.start());
        assert!(!g.resume());
        assert_eq!(g.state().status, GameStatus::Live);
    }

    #[test]
    fn scores_never_decrease_and_match_score_events() {
        let mut g = game(42, EventCadence::new(1.0, 30).unwrap());
        g.start();
        let (mut home, mut away) = (0, 0);
        while g.tick(&NullNotifier) != Tick::Finished {
            let state = g.state();
            assert!(state.home_score >= home);
            assert!(state.away_score >= away);
            home = state.home_score;
            away = state.away_score;
        }

        let points = |side: Side| -> u32 {
            g.state()
                .events
                .iter()
                .filter(|e| e.kind == EventKind::Score && e.side == side)
                .map(|e| u32::from(e.points.unwrap()))
                .sum()
        };
        assert_eq!(points(Side::Home), g.state().home_score);
        assert_eq!(points(Side::Away), g.state().away_score);
        assert!(
            g.state()
                .events
                .iter()
                .filter(|e| e.kind == EventKind::Score)
                .all(|e| (1..=3).contains(&e.points.unwrap()))
        );
    }

    #[test]
    fn events_only_fire_on_cadence_boundaries() {
        let mut g = game(5, EventCadence::new(1.0, 30).unwrap());
        g.start();
        run(&mut g, 29, &NullNotifier);
        assert!(g.state().events.is_empty());
        g.tick(&NullNotifier);
        assert_eq!(g.state().time_remaining, 690);
        assert_eq!(g.state().events.len(), 1);
        assert_ne!(g.state().events[0].kind, EventKind::QuarterEnd);
    }

    #[test]
    fn events_are_newest_first_with_unique_ids() {
        let mut g = game(9, EventCadence::new(1.0, 30).unwrap());
        g.start();
        run(&mut g, 300, &NullNotifier);
        let events = &g.state().events;
        assert_eq!(events.len(), 10);
        let ids: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), events.len());
        assert_eq!(events[0].id, "evt-10");
        assert_eq!(events[9].id, "evt-1");
        for e in events {
            assert!(e.kind.catalog().contains(&e.description.as_str()));
        }
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = game(2024, EventCadence::default());
        let mut b = game(2024, EventCadence::default());
        a.start();
        b.start();
        run(&mut a, 2000, &NullNotifier);
        run(&mut b, 2000, &NullNotifier);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn score_events_notify_with_score_line() {
        let notifier = RecordingNotifier::default();
        let mut g = game(11, EventCadence::new(1.0, 30).unwrap());
        g.start();
        run(&mut g, 720, &notifier);

        let seen = notifier.seen.borrow();
        let scores = g
            .state()
            .events
            .iter()
            .filter(|e| e.kind == EventKind::Score)
            .count();
        assert_eq!(seen.len(), scores);
        for n in seen.iter() {
            assert_eq!(n.tag, "score-update");
            assert!(
                n.title == "Cairo Pharaohs scores!" || n.title == "Johannesburg Thunder scores!",
                "unexpected title {}",
                n.title
            );
        }
        if let Some(last) = seen.last() {
            assert_eq!(
                last.body,
                format!("{} - {}", g.state().home_score, g.state().away_score)
            );
        }
    }

    #[test]
    fn notification_failures_do_not_affect_the_game() {
        let mut ok = game(77, EventCadence::default());
        let mut failing = game(77, EventCadence::default());
        ok.start();
        failing.start();
        run(&mut ok, 2880, &NullNotifier);
        run(&mut failing, 2880, &ClosedNotifier);
        assert_eq!(ok.state(), failing.state());
        assert_eq!(failing.state().status, GameStatus::Finished);
    }

    #[test]
    fn matchup_can_only_change_before_tip_off() {
        let league = League::aebl();
        let other = Matchup::from_match(&league, league.match_by_id("match-6").unwrap()).unwrap();
        let mut g = game(1, EventCadence::default());
        assert!(g.set_matchup(other.clone()));
        assert_eq!(g.matchup().home.id, "nairobi-warriors");

        g.start();
        let first = Matchup::default_for(&league).unwrap();
        assert!(!g.set_matchup(first));
        assert_eq!(g.matchup(), &other);
    }

    #[test]
    fn matchup_requires_known_teams() {
        let mut league = League::aebl();
        league.matches[0].home_team_id = "ghost".into();
        let err = Matchup::from_match(&league, &league.matches[0]).unwrap_err();
        assert_eq!(err, LeagueError::TeamNotFound("ghost".into()));
        assert_eq!(
            Matchup::default_for(&League::default()).unwrap_err(),
            LeagueError::NoMatches
        );
    }

    #[test]
    fn cadence_rejects_invalid_settings() {
        assert_eq!(EventCadence::new(1.5, 30), Err(CadenceError::Probability(1.5)));
        assert_eq!(EventCadence::new(-0.1, 30), Err(CadenceError::Probability(-0.1)));
        assert_eq!(EventCadence::new(0.2, 0), Err(CadenceError::ZeroInterval));
        assert!(EventCadence::new(0.0, 1).is_ok());
    }

    #[test]
    fn clock_label_and_progress() {
        let mut g = game(1, EventCadence::silent());
        assert_eq!(g.state().clock_label(), "12:00");
        assert_eq!(g.state().clock_progress(), 1.0);
        g.start();
        run(&mut g, 715, &NullNotifier);
        assert_eq!(g.state().clock_label(), "0:05");
    }

    #[test]
    fn winner_is_only_known_at_the_final_buzzer() {
        let mut g = game(1, EventCadence::silent());
        g.start();
        g.state.home_score = 80;
        g.state.away_score = 78;
        assert_eq!(g.state().winner(), None);
        g.state.quarter = 4;
        g.state.time_remaining = 1;
        g.tick(&NullNotifier);
        assert_eq!(g.state().winner(), Some(Side::Home));
    }
}
