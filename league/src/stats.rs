use crate::{Conference, League, Player, Position, Team};
use std::collections::BTreeMap;

/// Matches shown in a team's recent-scores chart.
pub const RECENT_SCORES_WINDOW: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary<'a> {
    pub team: &'a Team,
    pub win_pct: f64,
    /// League table points: two per win.
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionBreakdown {
    pub position: Position,
    pub count: usize,
    pub avg_ppg: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatCategory {
    #[default]
    Points,
    Rebounds,
    Assists,
}

impl StatCategory {
    pub const ALL: [StatCategory; 3] = [
        StatCategory::Points,
        StatCategory::Rebounds,
        StatCategory::Assists,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::Points => "Top Scorers",
            StatCategory::Rebounds => "Top Rebounders",
            StatCategory::Assists => "Assist Leaders",
        }
    }

    pub fn next(self) -> Self {
        match self {
            StatCategory::Points => StatCategory::Rebounds,
            StatCategory::Rebounds => StatCategory::Assists,
            StatCategory::Assists => StatCategory::Points,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            StatCategory::Points => "PPG",
            StatCategory::Rebounds => "RPG",
            StatCategory::Assists => "APG",
        }
    }

    pub fn value(&self, player: &Player) -> f64 {
        match self {
            StatCategory::Points => player.stats.ppg,
            StatCategory::Rebounds => player.stats.rpg,
            StatCategory::Assists => player.stats.apg,
        }
    }
}

/// One point in a team's recent-scores series.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorePoint {
    pub date: chrono::NaiveDate,
    /// Points scored; unplayed matches count as 0.
    pub score: u16,
    pub played: bool,
}

pub fn team_summaries(league: &League) -> Vec<TeamSummary<'_>> {
    league
        .teams
        .iter()
        .map(|team| TeamSummary {
            team,
            win_pct: team.win_pct(),
            points: u32::from(team.wins) * 2,
        })
        .collect()
}

/// Simple box-score efficiency: points + rebounds + assists per game.
pub fn efficiency(player: &Player) -> f64 {
    player.stats.ppg + player.stats.rpg + player.stats.apg
}

pub fn conference_distribution(league: &League) -> Vec<(Conference, usize)> {
    Conference::ALL
        .iter()
        .map(|&c| (c, league.teams.iter().filter(|t| t.conference == c).count()))
        .collect()
}

/// Player count and scoring average for each position that has players.
pub fn position_breakdown(league: &League) -> Vec<PositionBreakdown> {
    let mut acc: BTreeMap<Position, (usize, f64)> = BTreeMap::new();
    for player in &league.players {
        let entry = acc.entry(player.position).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += player.stats.ppg;
    }
    acc.into_iter()
        .map(|(position, (count, total))| PositionBreakdown {
            position,
            count,
            avg_ppg: total / count as f64,
        })
        .collect()
}

/// Top `limit` players for a category, best first.
pub fn leaders(league: &League, category: StatCategory, limit: usize) -> Vec<&Player> {
    let mut out: Vec<&Player> = league.players.iter().collect();
    out.sort_by(|a, b| category.value(b).total_cmp(&category.value(a)));
    out.truncate(limit);
    out
}

pub fn league_average_ppg(league: &League) -> f64 {
    if league.players.is_empty() {
        return 0.0;
    }
    league.players.iter().map(|p| p.stats.ppg).sum::<f64>() / league.players.len() as f64
}

/// Wins over games played across the whole league.
pub fn league_win_pct(league: &League) -> f64 {
    let wins: u32 = league.teams.iter().map(|t| u32::from(t.wins)).sum();
    let played: u32 = league.teams.iter().map(|t| u32::from(t.games_played())).sum();
    if played == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(played)
    }
}

/// Last [`RECENT_SCORES_WINDOW`] matches for a team, oldest first.
pub fn recent_scores(league: &League, team_id: &str) -> Vec<ScorePoint> {
    let mut matches = league.team_matches(team_id);
    matches.reverse();
    let skip = matches.len().saturating_sub(RECENT_SCORES_WINDOW);
    matches
        .into_iter()
        .skip(skip)
        .map(|m| {
            let score = m.score_for(team_id);
            ScorePoint {
                date: m.date,
                score: score.unwrap_or(0),
                played: score.is_some(),
            }
        })
        .collect()
}
