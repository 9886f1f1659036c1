use crate::{Conference, Match, MatchStatus, Player, PlayerStats, Position, Team};
use chrono::{NaiveDate, NaiveTime};

/// The whole league, held in memory. Built once at startup and only read after.
#[derive(Debug, Clone, Default)]
pub struct League {
    pub name: String,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
}

impl League {
    /// The seeded African Elite Basketball League season.
    pub fn aebl() -> Self {
        Self {
            name: "African Elite Basketball League".to_string(),
            teams: seed_teams(),
            players: seed_players(),
            matches: seed_matches(),
        }
    }

    pub fn team_by_id(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn player_by_id(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn match_by_id(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Team display name, or "Unknown" for a dangling id.
    pub fn team_name(&self, id: &str) -> &str {
        self.team_by_id(id).map(|t| t.name.as_str()).unwrap_or("Unknown")
    }

    pub fn players_by_team(&self, team_id: &str) -> Vec<&Player> {
        self.players.iter().filter(|p| p.team_id == team_id).collect()
    }

    /// Every match a team is involved in, most recent first.
    pub fn team_matches(&self, team_id: &str) -> Vec<&Match> {
        let mut out: Vec<&Match> = self.matches.iter().filter(|m| m.involves(team_id)).collect();
        out.sort_by(|a, b| b.date.cmp(&a.date));
        out
    }

    /// Finished matches, most recent first.
    pub fn recent_matches(&self, limit: usize) -> Vec<&Match> {
        let mut out = self.matches_by_status(MatchStatus::Finished);
        out.sort_by(|a, b| b.date.cmp(&a.date));
        out.truncate(limit);
        out
    }

    /// Scheduled matches, soonest first.
    pub fn upcoming_matches(&self, limit: usize) -> Vec<&Match> {
        let mut out = self.matches_by_status(MatchStatus::Scheduled);
        out.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        out.truncate(limit);
        out
    }

    pub fn matches_by_status(&self, status: MatchStatus) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.status == status).collect()
    }

    /// Conference members ordered by wins, as the team directory lists them.
    pub fn teams_by_conference(&self, conference: Conference) -> Vec<&Team> {
        let mut out: Vec<&Team> =
            self.teams.iter().filter(|t| t.conference == conference).collect();
        out.sort_by(|a, b| b.wins.cmp(&a.wins));
        out
    }
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn team(
    id: &str,
    name: &str,
    city: &str,
    country: &str,
    primary_color: &str,
    secondary_color: &str,
    wins: u16,
    losses: u16,
    conference: Conference,
) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        primary_color: primary_color.to_string(),
        secondary_color: secondary_color.to_string(),
        wins,
        losses,
        conference,
    }
}

fn seed_teams() -> Vec<Team> {
    use Conference::{East, West};
    vec![
        team("lagos-lions", "Lagos Lions", "Lagos", "Nigeria", "#FF6B00", "#1A1A1A", 18, 6, West),
        team("cairo-pharaohs", "Cairo Pharaohs", "Cairo", "Egypt", "#FFD700", "#000080", 17, 7, East),
        team(
            "johannesburg-thunder",
            "Johannesburg Thunder",
            "Johannesburg",
            "South Africa",
            "#00A651",
            "#FFB81C",
            16,
            8,
            East,
        ),
        team("nairobi-warriors", "Nairobi Warriors", "Nairobi", "Kenya", "#DC143C", "#006B3F", 15, 9, East),
        team("accra-storm", "Accra Storm", "Accra", "Ghana", "#006B3F", "#FCD116", 14, 10, West),
        team(
            "casablanca-eagles",
            "Casablanca Eagles",
            "Casablanca",
            "Morocco",
            "#C1272D",
            "#006233",
            12,
            12,
            West,
        ),
        team("dakar-panthers", "Dakar Panthers", "Dakar", "Senegal", "#00853F", "#FDEF42", 10, 14, West),
        team("addis-kings", "Addis Kings", "Addis Ababa", "Ethiopia", "#078930", "#FCDD09", 8, 16, East),
    ]
}

#[allow(clippy::too_many_arguments)]
fn player(
    id: &str,
    name: &str,
    number: u8,
    position: Position,
    height: &str,
    weight: &str,
    age: u8,
    team_id: &str,
    (ppg, rpg, apg): (f64, f64, f64),
) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        number,
        position,
        height: height.to_string(),
        weight: weight.to_string(),
        age,
        team_id: team_id.to_string(),
        stats: PlayerStats { ppg, rpg, apg },
    }
}

fn seed_players() -> Vec<Player> {
    use Position::{C, PF, PG, SF, SG};
    vec![
        player("player-1", "Chukwudi Okonkwo", 23, SF, "6'8\"", "220 lbs", 27, "lagos-lions", (24.5, 7.2, 5.1)),
        player("player-2", "Emeka Nwosu", 10, PG, "6'2\"", "185 lbs", 25, "lagos-lions", (18.3, 3.5, 9.2)),
        player("player-3", "Ahmed Hassan", 7, SG, "6'5\"", "200 lbs", 26, "cairo-pharaohs", (22.1, 4.8, 3.9)),
        player("player-4", "Omar Farouk", 15, C, "7'0\"", "250 lbs", 29, "cairo-pharaohs", (16.7, 11.3, 2.1)),
        player(
            "player-5",
            "Thabo Sefolosha",
            3,
            SF,
            "6'7\"",
            "215 lbs",
            28,
            "johannesburg-thunder",
            (20.4, 6.5, 4.2),
        ),
        player(
            "player-6",
            "Mandla Dlamini",
            21,
            PF,
            "6'10\"",
            "235 lbs",
            30,
            "johannesburg-thunder",
            (17.8, 9.6, 2.8),
        ),
        player("player-7", "Victor Oladipo", 4, SG, "6'4\"", "195 lbs", 24, "nairobi-warriors", (21.6, 5.1, 4.7)),
        player("player-8", "James Mwangi", 12, PG, "6'1\"", "180 lbs", 23, "nairobi-warriors", (15.9, 3.2, 8.5)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn fixture(
    id: &str,
    home_team_id: &str,
    away_team_id: &str,
    score: Option<(u16, u16)>,
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
    venue: &str,
) -> Match {
    Match {
        id: id.to_string(),
        home_team_id: home_team_id.to_string(),
        away_team_id: away_team_id.to_string(),
        home_score: score.map(|(h, _)| h),
        away_score: score.map(|(_, a)| a),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        venue: venue.to_string(),
        status: if score.is_some() {
            MatchStatus::Finished
        } else {
            MatchStatus::Scheduled
        },
    }
}

fn seed_matches() -> Vec<Match> {
    vec![
        fixture("match-1", "lagos-lions", "cairo-pharaohs", Some((98, 92)), (2025, 10, 1), (19, 0), "Teslim Balogun Stadium"),
        fixture(
            "match-2",
            "johannesburg-thunder",
            "nairobi-warriors",
            Some((105, 101)),
            (2025, 10, 1),
            (20, 0),
            "Ellis Park Arena",
        ),
        fixture("match-3", "accra-storm", "casablanca-eagles", Some((88, 95)), (2025, 10, 2), (18, 30), "Accra Sports Stadium"),
        fixture("match-4", "dakar-panthers", "addis-kings", Some((76, 82)), (2025, 10, 2), (19, 30), "Dakar Arena"),
        fixture("match-5", "cairo-pharaohs", "johannesburg-thunder", None, (2025, 10, 5), (20, 0), "Cairo Stadium"),
        fixture("match-6", "nairobi-warriors", "lagos-lions", None, (2025, 10, 5), (19, 0), "Nyayo National Stadium"),
        fixture(
            "match-7",
            "casablanca-eagles",
            "dakar-panthers",
            None,
            (2025, 10, 6),
            (18, 0),
            "Complexe Sportif Mohammed V",
        ),
        fixture("match-8", "addis-kings", "accra-storm", None, (2025, 10, 6), (17, 0), "Addis Ababa Stadium"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_league_is_consistent() {
        let league = League::aebl();
        assert_eq!(league.teams.len(), 8);
        assert_eq!(league.players.len(), 8);
        assert_eq!(league.matches.len(), 8);
        for m in &league.matches {
            assert!(league.team_by_id(&m.home_team_id).is_some(), "{} home team", m.id);
            assert!(league.team_by_id(&m.away_team_id).is_some(), "{} away team", m.id);
        }
        for p in &league.players {
            assert!(league.team_by_id(&p.team_id).is_some(), "{} team", p.id);
        }
    }

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let league = League::aebl();
        assert!(league.team_by_id("timbuktu-tigers").is_none());
        assert!(league.player_by_id("player-99").is_none());
        assert!(league.match_by_id("match-99").is_none());
        assert_eq!(league.team_name("timbuktu-tigers"), "Unknown");
    }

    #[test]
    fn roster_filters_by_team() {
        let league = League::aebl();
        let roster: Vec<&str> = league
            .players_by_team("lagos-lions")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(roster, vec!["Chukwudi Okonkwo", "Emeka Nwosu"]);
        assert!(league.players_by_team("addis-kings").is_empty());
    }

    #[test]
    fn recent_matches_are_finished_and_newest_first() {
        let league = League::aebl();
        let recent = league.recent_matches(2);
        assert_eq!(recent.len(), 2);
        assert!(recent.iter().all(|m| m.status == MatchStatus::Finished));
        assert_eq!(recent[0].date, NaiveDate::from_ymd_opt(2025, 10, 2).unwrap());
    }

    #[test]
    fn upcoming_matches_are_scheduled_and_soonest_first() {
        let league = League::aebl();
        let ids: Vec<&str> = league.upcoming_matches(4).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["match-6", "match-5", "match-8", "match-7"]);
    }

    #[test]
    fn team_matches_are_newest_first() {
        let league = League::aebl();
        let ids: Vec<&str> = league
            .team_matches("lagos-lions")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["match-6", "match-1"]);
    }

    #[test]
    fn conference_directory_sorted_by_wins() {
        let league = League::aebl();
        let east: Vec<&str> = league
            .teams_by_conference(Conference::East)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(
            east,
            vec!["cairo-pharaohs", "johannesburg-thunder", "nairobi-warriors", "addis-kings"]
        );
    }
}
