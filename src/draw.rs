use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{
    BarChart, Block, BorderType, Borders, Cell, Gauge, Paragraph, Row, Sparkline, Table, Tabs,
};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::banner::AnimatedBanner;
use crate::ui::layout::LayoutAreas;
use aebl_league::live::{EventKind, GameStatus, Side};
use aebl_league::schedule::schedule;
use aebl_league::search::search;
use aebl_league::standings::{conference_standings, playoff_picture};
use aebl_league::stats::{
    StatCategory, conference_distribution, efficiency, league_average_ppg, league_win_pct,
    leaders, position_breakdown, recent_scores, team_summaries,
};
use aebl_league::{Conference, League, Match, MatchStatus, Team};

static TABS: &[&str; 8] = &[
    "Home", "Teams", "Standings", "Schedule", "Stats", "Live", "Search", "Export",
];

const HOME_LIST_LEN: usize = 4;
const LEADERS_LEN: usize = 5;

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let drawn = terminal.draw(|f| {
        if app.state.show_intro {
            draw_intro(f, f.area(), app);
            return;
        }

        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
            draw_toast(f, layout.toast, app);
        }

        match app.state.active_tab {
            MenuItem::Home => draw_home(f, layout.main, app),
            MenuItem::Teams => draw_teams(f, layout.main, app),
            MenuItem::Standings => draw_standings(f, layout.main, app),
            MenuItem::Schedule => draw_schedule(f, layout.main, app),
            MenuItem::Stats => draw_stats(f, layout.main, app),
            MenuItem::Live => draw_live(f, layout.main, app),
            MenuItem::Search => draw_search(f, layout.main, app),
            MenuItem::Export => draw_export(f, layout.main, app),
            MenuItem::Help => draw_help(f, layout.main),
        }

        if app.state.show_logs {
            draw_logs(f, layout.logs);
        }
    });
    if drawn.is_err() {
        log::error!("failed to draw frame");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn team_color(team: &Team) -> Color {
    team.primary_rgb()
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

/// `Home 98 - 92 Away` for played matches, `Home vs Away` otherwise.
fn match_line(league: &League, m: &Match) -> String {
    let home = league.team_name(&m.home_team_id);
    let away = league.team_name(&m.away_team_id);
    match (m.home_score, m.away_score) {
        (Some(h), Some(a)) => format!("{home} {h} - {a} {away}"),
        _ => format!("{home} vs {away}"),
    }
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

fn draw_intro(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" AEBL Courtside ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [_top_pad, banner_area, prompt_area, _bottom_pad] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let subtitle = format!(
        "{} teams  ·  {} players  ·  {} matches",
        app.league.teams.len(),
        app.league.players.len(),
        app.league.matches.len()
    );
    f.render_widget(
        AnimatedBanner {
            frame: app.state.animation.frame,
            tick: app.state.animation.tick,
            subtitle,
        },
        banner_area,
    );
    f.render_widget(
        Paragraph::new("Press Enter to tip off")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        prompt_area,
    );
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = |item: MenuItem| match item {
        MenuItem::Home | MenuItem::Help => 0,
        MenuItem::Teams => 1,
        MenuItem::Standings => 2,
        MenuItem::Schedule => 3,
        MenuItem::Stats => 4,
        MenuItem::Live => 5,
        MenuItem::Search => 6,
        MenuItem::Export => 7,
    };
    let selected = if app.state.active_tab == MenuItem::Help {
        tab_index(app.state.previous_tab)
    } else {
        tab_index(app.state.active_tab)
    };

    let titles: Vec<Line> = TABS
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let mut title = format!("{} {t}", i + 1);
            if i == 5 && app.game.state().status == GameStatus::Live {
                title.push_str(" ●");
            }
            Line::from(title)
        })
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(selected)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn draw_toast(f: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let line = if let Some(err) = app.state.last_error.as_deref() {
        Line::from(Span::styled(format!(" ! {err}"), Style::default().fg(Color::Red)))
    } else if let Some(toast) = app.state.toast.as_ref() {
        Line::from(vec![
            Span::styled(
                format!(" {} ", toast.at.format("%H:%M:%S")),
                dim(),
            ),
            Span::styled(
                toast.title.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(toast.body.as_str()),
        ])
    } else {
        let bell = if app.notifications_enabled() { "on" } else { "off" };
        Line::from(Span::styled(
            format!(" notifications {bell} (n)  ·  logs (\")  ·  full screen (f)"),
            dim(),
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan))
        .style_debug(Style::default().fg(Color::Green))
        .style_trace(Style::default().fg(Color::Magenta));
    f.render_widget(logs, area);
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

fn draw_home(f: &mut Frame, area: Rect, app: &App) {
    let league = &app.league;
    let block = default_border(Color::White).title(format!(" {} ", league.name));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [summary, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);

    let state = app.game.state();
    let matchup = app.game.matchup();
    let live = match state.status {
        GameStatus::NotStarted => format!(
            "Next up: {} vs {} (6 to go live)",
            matchup.home.name, matchup.away.name
        ),
        _ => format!(
            "{}: {} {} - {} {}  Q{} {}",
            state.status.label(),
            matchup.home.name,
            state.home_score,
            state.away_score,
            matchup.away.name,
            state.quarter,
            state.clock_label()
        ),
    };
    f.render_widget(
        Paragraph::new(vec![
            Line::from(format!(
                "{} teams  ·  {} players  ·  avg {:.1} PPG  ·  league win {:.1}%",
                league.teams.len(),
                league.players.len(),
                league_average_ppg(league),
                league_win_pct(league) * 100.0
            )),
            Line::from(Span::styled(live, Style::default().fg(Color::Green))),
        ]),
        summary,
    );

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);

    let mut results = vec![heading("Latest Results")];
    for m in league.recent_matches(HOME_LIST_LEN) {
        results.push(Line::from(format!("{}  {}", m.date.format("%b %d"), match_line(league, m))));
    }
    results.push(Line::from(""));
    results.push(heading("Upcoming"));
    for m in league.upcoming_matches(HOME_LIST_LEN) {
        results.push(Line::from(format!(
            "{} {}  {}",
            m.date.format("%b %d"),
            m.kickoff_label(),
            match_line(league, m)
        )));
        results.push(Line::from(Span::styled(format!("      {}", m.venue), dim())));
    }
    f.render_widget(Paragraph::new(results), left);

    let mut leaders_lines = vec![heading("Conference Leaders")];
    for conference in Conference::ALL {
        if let Some(row) = conference_standings(league, conference).first() {
            leaders_lines.push(Line::from(vec![
                Span::styled(format!("{:<20}", conference.label()), dim()),
                Span::styled(
                    row.team.name.clone(),
                    Style::default().fg(team_color(row.team)),
                ),
                Span::raw(format!("  {}", row.team.record())),
            ]));
        }
    }
    leaders_lines.push(Line::from(""));
    leaders_lines.push(heading("Playoff Picture"));
    for conference in Conference::ALL {
        let seeds: Vec<String> = playoff_picture(league, conference)
            .iter()
            .map(|row| format!("{}. {}", row.rank, row.team.city))
            .collect();
        leaders_lines.push(Line::from(Span::styled(format!("{:?}", conference), dim())));
        leaders_lines.push(Line::from(format!("  {}", seeds.join("  "))));
    }
    leaders_lines.push(Line::from(""));
    leaders_lines.push(heading("Top Scorer"));
    if let Some(p) = leaders(league, StatCategory::Points, 1).first() {
        leaders_lines.push(Line::from(format!(
            "{} ({}) {:.1} PPG",
            p.name,
            league.team_name(&p.team_id),
            p.stats.ppg
        )));
    }
    f.render_widget(Paragraph::new(leaders_lines), right);
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

fn draw_teams(f: &mut Frame, area: Rect, app: &App) {
    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Length(32), Constraint::Fill(1)]).areas(area);

    let block = default_border(Color::White).title(" Teams ");
    let inner = block.inner(list_area);
    f.render_widget(block, list_area);

    let mut lines = Vec::new();
    let mut conference = None;
    for (idx, id) in app.team_order.iter().enumerate() {
        let Some(team) = app.league.team_by_id(id) else {
            continue;
        };
        if conference != Some(team.conference) {
            if conference.is_some() {
                lines.push(Line::from(""));
            }
            conference = Some(team.conference);
            lines.push(heading(team.conference.label()));
        }
        let selected = idx == app.state.teams.selected;
        let marker = if selected { ">" } else { " " };
        let style = if selected {
            Style::default().fg(team_color(team)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{marker} ")),
            Span::styled(format!("{:<20}", team.name), style),
            Span::styled(team.record(), dim()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("j/k to move", dim())));
    f.render_widget(Paragraph::new(lines), inner);

    let Some(team) = app.selected_team() else {
        f.render_widget(
            Paragraph::new("No team selected").style(dim()).block(default_border(Color::DarkGray)),
            detail_area,
        );
        return;
    };
    draw_team_detail(f, detail_area, &app.league, team);
}

fn draw_team_detail(f: &mut Frame, area: Rect, league: &League, team: &Team) {
    let block = default_border(team_color(team)).title(format!(" {} ", team.name));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [profile, roster_area, chart_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(6),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(format!("{}, {}  ·  {}", team.city, team.country, team.conference.label())),
            Line::from(format!(
                "Record {}  ·  Win {}  ·  Colors {} / {}",
                team.record(),
                team.win_pct_label(),
                team.primary_color,
                team.secondary_color
            )),
        ]),
        profile,
    );

    let [roster_col, matches_col] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(roster_area);

    let roster = league.players_by_team(&team.id);
    let rows: Vec<Row> = roster
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(format!("#{}", p.number)),
                Cell::from(p.name.clone()),
                Cell::from(p.position.code()),
                Cell::from(format!("{:.1}", p.stats.ppg)),
                Cell::from(format!("{:.1}", p.stats.rpg)),
                Cell::from(format!("{:.1}", p.stats.apg)),
            ])
        })
        .collect();
    let roster_table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(5),
        ],
    )
    .header(
        Row::new(vec!["No", "Player", "Pos", "PPG", "RPG", "APG"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title("Roster"));
    f.render_widget(roster_table, roster_col);

    let mut match_lines = vec![Line::from("Matches")];
    for m in league.team_matches(&team.id) {
        let result = match m.winner_id() {
            Some(winner) if winner == team.id => Span::styled("W ", Style::default().fg(Color::Green)),
            Some(_) => Span::styled("L ", Style::default().fg(Color::Red)),
            None => Span::styled("- ", dim()),
        };
        match_lines.push(Line::from(vec![
            result,
            Span::raw(format!("{} {}", m.date.format("%b %d"), match_line(league, m))),
        ]));
    }
    f.render_widget(Paragraph::new(match_lines), matches_col);

    let series = recent_scores(league, &team.id);
    let values: Vec<u64> = series.iter().map(|p| u64::from(p.score)).collect();
    let played = series.iter().filter(|p| p.played).count();
    let sparkline = Sparkline::default()
        .block(default_border(Color::DarkGray).title(format!(
            " Recent scores ({played} played) "
        )))
        .data(&values)
        .style(Style::default().fg(team_color(team)));
    f.render_widget(sparkline, chart_area);
}

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

fn draw_standings(f: &mut Frame, area: Rect, app: &App) {
    let [east, west] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    draw_conference_table(f, east, &app.league, Conference::East);
    draw_conference_table(f, west, &app.league, Conference::West);
}

fn draw_conference_table(f: &mut Frame, area: Rect, league: &League, conference: Conference) {
    let rows: Vec<Row> = conference_standings(league, conference)
        .into_iter()
        .map(|row| {
            let style = if row.in_playoffs() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(row.rank.to_string()),
                Cell::from(row.team.name.clone()),
                Cell::from(row.team.wins.to_string()),
                Cell::from(row.team.losses.to_string()),
                Cell::from(row.team.win_pct_label()),
                Cell::from(row.games_behind_label()),
                Cell::from(row.streak.label()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(4),
            Constraint::Length(4),
        ],
    )
    .header(
        Row::new(vec!["#", "Team", "W", "L", "PCT", "GB", "STRK"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(default_border(Color::White).title(format!(" {} ", conference.label())));
    f.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

fn draw_schedule(f: &mut Frame, area: Rect, app: &App) {
    let filter = app.state.schedule.filter;
    let block = default_border(Color::White).title(format!(" Schedule: {} ", filter.label()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let days = schedule(&app.league, filter);
    let mut lines = vec![Line::from(Span::styled("c to change filter, j/k to scroll", dim()))];
    if days.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from("No matches"));
    }
    for day in days {
        lines.push(Line::from(""));
        lines.push(heading(day.date.format("%A, %B %-d %Y").to_string()));
        for m in day.matches {
            let status_style = match m.status {
                MatchStatus::Finished => dim(),
                MatchStatus::Live => Style::default().fg(Color::Red),
                MatchStatus::Scheduled => Style::default().fg(Color::Green),
            };
            lines.push(Line::from(vec![
                Span::raw(format!("  {}  ", m.kickoff_label())),
                Span::raw(format!("{:<48}", match_line(&app.league, m))),
                Span::styled(format!("{:<10}", m.status.label()), status_style),
                Span::styled(m.venue.clone(), dim()),
            ]));
        }
    }

    f.render_widget(
        Paragraph::new(lines).scroll((app.state.schedule.scroll_offset, 0)),
        inner,
    );
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let league = &app.league;
    let [top, bottom] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);
    let [leaders_area, chart_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);

    let category = app.state.stats.category;
    let mut lines = vec![Line::from(Span::styled("c to change category", dim()))];
    for (rank, p) in leaders(league, category, LEADERS_LEN).iter().enumerate() {
        lines.push(Line::from(format!(
            "{}. {:<22} {:<22} {:>5.1} {}",
            rank + 1,
            p.name,
            league.team_name(&p.team_id),
            category.value(p),
            category.unit()
        )));
    }
    lines.push(Line::from(""));
    lines.push(heading("Efficiency (PPG+RPG+APG)"));
    let mut by_efficiency: Vec<_> = league.players.iter().collect();
    by_efficiency.sort_by(|a, b| efficiency(b).total_cmp(&efficiency(a)));
    for p in by_efficiency.iter().take(3) {
        lines.push(Line::from(format!("{:<22} {:.1}", p.name, efficiency(p))));
    }
    f.render_widget(
        Paragraph::new(lines).block(default_border(Color::White).title(format!(" {} ", category.label()))),
        leaders_area,
    );

    let summaries = team_summaries(league);
    let labels: Vec<String> = summaries
        .iter()
        .map(|s| s.team.city.chars().take(3).collect::<String>().to_uppercase())
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(&summaries)
        .map(|(label, s)| (label.as_str(), (s.win_pct * 100.0).round() as u64))
        .collect();
    let chart = BarChart::default()
        .block(default_border(Color::White).title(" Win % "))
        .data(data.as_slice())
        .bar_width(4)
        .bar_gap(1)
        .max(100)
        .bar_style(Style::default().fg(Color::Rgb(255, 107, 0)))
        .value_style(Style::default().fg(Color::Black).bg(Color::Rgb(255, 107, 0)));
    f.render_widget(chart, chart_area);

    let [positions_area, table_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(bottom);

    let mut position_lines = vec![heading("Players by position")];
    for b in position_breakdown(league) {
        position_lines.push(Line::from(format!(
            "{:<3} {} player(s)  avg {:.1} PPG",
            b.position.code(),
            b.count,
            b.avg_ppg
        )));
    }
    position_lines.push(Line::from(""));
    position_lines.push(heading("Teams by conference"));
    for (conference, count) in conference_distribution(league) {
        position_lines.push(Line::from(format!("{:<20} {count}", conference.label())));
    }
    f.render_widget(
        Paragraph::new(position_lines).block(default_border(Color::DarkGray)),
        positions_area,
    );

    let rows: Vec<Row> = summaries
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.team.name.clone()),
                Cell::from(s.team.record()),
                Cell::from(format!("{:.1}%", s.win_pct * 100.0)),
                Cell::from(s.points.to_string()),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(4),
        ],
    )
    .header(
        Row::new(vec!["Team", "W-L", "Win", "Pts"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(default_border(Color::DarkGray).title(" Team points "));
    f.render_widget(table, table_area);
}

// ---------------------------------------------------------------------------
// Live
// ---------------------------------------------------------------------------

fn draw_live(f: &mut Frame, area: Rect, app: &App) {
    let state = app.game.state();
    let matchup = app.game.matchup();
    let status_color = match state.status {
        GameStatus::Live => Color::Red,
        GameStatus::Paused => Color::Yellow,
        GameStatus::Finished => Color::Green,
        GameStatus::NotStarted => Color::DarkGray,
    };
    let block = default_border(status_color).title(format!(
        " Live: {} · {} ",
        state.status.label(),
        matchup.venue
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [score_area, clock_area, controls_area, events_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let [home_area, mid_area, away_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
    ])
    .areas(score_area);

    for (side, rect) in [(Side::Home, home_area), (Side::Away, away_area)] {
        let team = matchup.team(side);
        let winner = state.winner() == Some(side);
        let mut name_style = Style::default().fg(team_color(team)).add_modifier(Modifier::BOLD);
        if winner {
            name_style = name_style.add_modifier(Modifier::UNDERLINED);
        }
        let tag = match side {
            Side::Home => "HOME",
            Side::Away => "AWAY",
        };
        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(team.name.as_str(), name_style)),
                Line::from(Span::styled(format!("{tag}  {}", team.record()), dim())),
                Line::from(Span::styled(
                    state.score(side).to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center),
            rect,
        );
    }

    let middle = match state.status {
        GameStatus::Finished => "FINAL".to_string(),
        _ => format!("Q{}  {}", state.quarter, state.clock_label()),
    };
    f.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(middle), Line::from("-")])
            .alignment(Alignment::Center),
        mid_area,
    );

    let gauge = Gauge::default()
        .block(default_border(Color::DarkGray).title(format!(" Quarter {} ", state.quarter)))
        .gauge_style(Style::default().fg(status_color))
        .ratio(state.clock_progress().clamp(0.0, 1.0))
        .label(state.clock_label());
    f.render_widget(gauge, clock_area);

    let controls = match state.status {
        GameStatus::NotStarted => "s start  h/l change matchup",
        GameStatus::Live => "p pause  x reset",
        GameStatus::Paused => "r resume  x reset",
        GameStatus::Finished => "x new game",
    };
    f.render_widget(Paragraph::new(Span::styled(controls, dim())), controls_area);

    let mut lines = Vec::new();
    if state.events.is_empty() {
        lines.push(Line::from(Span::styled("No plays yet", dim())));
    }
    let visible = events_area.height as usize;
    for event in state.events.iter().take(visible.max(1)) {
        let team = matchup.team(event.side);
        let style = match event.kind {
            EventKind::Score => Style::default().fg(Color::Green),
            EventKind::Foul => Style::default().fg(Color::Red),
            EventKind::QuarterEnd => Style::default().fg(Color::Yellow),
            EventKind::Timeout | EventKind::Substitution => Style::default().fg(Color::White),
        };
        let points = event.points.map(|p| format!(" +{p}")).unwrap_or_default();
        let who = if event.kind == EventKind::QuarterEnd {
            format!("Q{}", event.quarter)
        } else {
            team.name.clone()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", event.timestamp.format("%H:%M:%S")), dim()),
            Span::styled(format!("{:<7}", event.kind.label()), style),
            Span::styled(format!("{who:<22}"), Style::default().fg(team_color(team))),
            Span::raw(format!("{}{points}", event.description)),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP).title(" Play-by-play ")),
        events_area,
    );
}

// ---------------------------------------------------------------------------
// Search / export / help
// ---------------------------------------------------------------------------

fn draw_search(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Search ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [input_area, results_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(inner);

    let search_state = &app.state.search;
    let (input, style, title) = if search_state.composing {
        (
            format!("> {}_", search_state.query),
            Style::default().fg(Color::Yellow),
            " typing (Enter/Esc to finish) ",
        )
    } else if search_state.query.is_empty() {
        (
            "Press / or Enter to search teams and players".to_string(),
            dim(),
            " idle ",
        )
    } else {
        (
            format!("> {}", search_state.query),
            Style::default().fg(Color::White),
            " / edit  Esc clear ",
        )
    };
    f.render_widget(
        Paragraph::new(input).style(style).block(default_border(Color::DarkGray).title(title)),
        input_area,
    );

    if search_state.query.trim().is_empty() {
        return;
    }
    let results = search(&app.league, &search_state.query);
    let mut lines = vec![Line::from(Span::styled(
        format!("{} result(s)", results.len()),
        dim(),
    ))];
    if !results.teams.is_empty() {
        lines.push(heading("Teams"));
        for t in &results.teams {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<24}", t.name), Style::default().fg(team_color(t))),
                Span::raw(format!("{}, {}  {}", t.city, t.country, t.record())),
            ]));
        }
    }
    if !results.players.is_empty() {
        lines.push(heading("Players"));
        for p in &results.players {
            lines.push(Line::from(format!(
                "  {:<24}{:<3} #{:<3} {}",
                p.name,
                p.position.code(),
                p.number,
                app.league.team_name(&p.team_id)
            )));
        }
    }
    if results.is_empty() {
        lines.push(Line::from("No teams or players found"));
    }
    f.render_widget(Paragraph::new(lines), results_area);
}

fn draw_export(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Export ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let export_state = &app.state.export;
    let mut lines = vec![
        Line::from(Span::styled(
            "j/k dataset  h/l format  Enter write file",
            dim(),
        )),
        Line::from(""),
        heading("Dataset"),
    ];
    for dataset in aebl_league::export::Dataset::ALL {
        let selected = dataset == export_state.dataset();
        let marker = if selected { ">" } else { " " };
        let style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", dataset.title()),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Format: {}", export_state.format().label())));
    lines.push(Line::from(format!(
        "File:   {}",
        app.settings
            .export_dir
            .join(aebl_league::export::file_name(
                export_state.dataset(),
                export_state.format()
            ))
            .display()
    )));
    if let Some(path) = export_state.last_written.as_ref() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Last export: {}", path.display()),
            Style::default().fg(Color::Green),
        )));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let block = default_border(Color::DarkGray).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = [
        ("1-8", "switch tab"),
        ("?  / Esc", "open / close help"),
        ("q  Ctrl-C", "quit"),
        ("n", "toggle score notifications"),
        ("\"", "toggle log pane"),
        ("f", "toggle full screen"),
        ("j/k", "move (Teams, Schedule, Export)"),
        ("c", "cycle filter (Schedule) or category (Stats)"),
        ("s p r x", "start, pause, resume, reset the live game"),
        ("h/l", "change live matchup before tip-off, export format"),
        ("/  Enter", "search; Enter or Esc to finish typing"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:<12}"), Style::default().fg(Color::Yellow)),
                Span::raw(*what),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}
