use crate::{Conference, League, Team};

/// Number of teams per conference that make the playoffs.
pub const PLAYOFF_SPOTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Streak {
    Won(u16),
    Lost(u16),
}

impl Streak {
    /// Streak label: "W3", "L2". Capped at three games.
    pub fn label(&self) -> String {
        match self {
            Streak::Won(n) => format!("W{n}"),
            Streak::Lost(n) => format!("L{n}"),
        }
    }

    fn for_team(team: &Team) -> Self {
        if team.wins > team.losses {
            Streak::Won(team.wins.min(3))
        } else {
            Streak::Lost(team.losses.min(3))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRow<'a> {
    pub rank: usize,
    pub team: &'a Team,
    pub win_pct: f64,
    /// `None` for the conference leader.
    pub games_behind: Option<f64>,
    pub streak: Streak,
}

impl StandingsRow<'_> {
    pub fn games_behind_label(&self) -> String {
        self.games_behind
            .map(|gb| format!("{gb:.1}"))
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn in_playoffs(&self) -> bool {
        self.rank <= PLAYOFF_SPOTS
    }
}

/// Conference table ordered by win percentage. Ties keep seed order.
pub fn conference_standings(league: &League, conference: Conference) -> Vec<StandingsRow<'_>> {
    let mut teams: Vec<&Team> = league
        .teams
        .iter()
        .filter(|t| t.conference == conference)
        .collect();
    teams.sort_by(|a, b| b.win_pct().total_cmp(&a.win_pct()));

    let Some(leader) = teams.first().copied() else {
        return Vec::new();
    };

    teams
        .into_iter()
        .enumerate()
        .map(|(idx, team)| StandingsRow {
            rank: idx + 1,
            team,
            win_pct: team.win_pct(),
            games_behind: (idx > 0).then(|| games_behind(leader, team)),
            streak: Streak::for_team(team),
        })
        .collect()
}

/// Top [`PLAYOFF_SPOTS`] of a conference.
pub fn playoff_picture(league: &League, conference: Conference) -> Vec<StandingsRow<'_>> {
    let mut rows = conference_standings(league, conference);
    rows.truncate(PLAYOFF_SPOTS);
    rows
}

fn games_behind(leader: &Team, team: &Team) -> f64 {
    let wins_gap = f64::from(leader.wins) - f64::from(team.wins);
    let losses_gap = f64::from(team.losses) - f64::from(leader.losses);
    (wins_gap + losses_gap) / 2.0
}
