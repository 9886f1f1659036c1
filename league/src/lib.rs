pub mod data;
pub mod endpoints;
pub mod export;
pub mod live;
pub mod schedule;
pub mod search;
pub mod standings;
pub mod stats;

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};
use thiserror::Error;

pub use data::League;

// ---------------------------------------------------------------------------
// Domain types: teams, players, matches
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeagueError {
    #[error("Team not found: {0}")]
    TeamNotFound(String),
    #[error("League has no matches")]
    NoMatches,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Conference {
    #[default]
    East,
    West,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::East, Conference::West];

    pub fn label(&self) -> &'static str {
        match self {
            Conference::East => "Eastern Conference",
            Conference::West => "Western Conference",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub primary_color: String, // "#FF6B00"
    pub secondary_color: String,
    pub wins: u16,
    pub losses: u16,
    pub conference: Conference,
}

impl Team {
    pub fn games_played(&self) -> u16 {
        self.wins + self.losses
    }

    /// Fraction of games won in [0, 1]. A team with no games played sits at 0.
    pub fn win_pct(&self) -> f64 {
        match self.games_played() {
            0 => 0.0,
            played => f64::from(self.wins) / f64::from(played),
        }
    }

    /// Win percentage as displayed everywhere in the app: "75.0%".
    pub fn win_pct_label(&self) -> String {
        format!("{:.1}%", self.win_pct() * 100.0)
    }

    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    /// Parse the primary colour into RGB, if it is a well-formed `#RRGGBB`.
    pub fn primary_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.primary_color)
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PG,
        Position::SG,
        Position::SF,
        Position::PF,
        Position::C,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlayerStats {
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub number: u8,
    pub position: Position,
    pub height: String, // 6'8"
    pub weight: String, // "220 lbs"
    pub age: u8,
    pub team_id: String,
    pub stats: PlayerStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
}

impl MatchStatus {
    /// Parse the lowercase wire form. Anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(MatchStatus::Scheduled),
            "live" => Some(MatchStatus::Live),
            "finished" => Some(MatchStatus::Finished),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::Live => "Live",
            MatchStatus::Finished => "Final",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_score: Option<u16>,
    pub away_score: Option<u16>,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_kickoff")]
    pub time: NaiveTime,
    pub venue: String,
    pub status: MatchStatus,
}

impl Match {
    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Points scored by `team_id` in this match; `None` if unplayed or not involved.
    pub fn score_for(&self, team_id: &str) -> Option<u16> {
        if self.home_team_id == team_id {
            self.home_score
        } else if self.away_team_id == team_id {
            self.away_score
        } else {
            None
        }
    }

    pub fn winner_id(&self) -> Option<&str> {
        if self.status != MatchStatus::Finished {
            return None;
        }
        let (home, away) = (self.home_score?, self.away_score?);
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(self.home_team_id.as_str()),
            std::cmp::Ordering::Less => Some(self.away_team_id.as_str()),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn kickoff_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

fn serialize_kickoff<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(wins: u16, losses: u16) -> Team {
        Team {
            id: "t".into(),
            wins,
            losses,
            primary_color: "#FF6B00".into(),
            ..Default::default()
        }
    }

    #[test]
    fn win_pct_handles_empty_record() {
        assert_eq!(team(0, 0).win_pct(), 0.0);
        assert_eq!(team(18, 6).win_pct_label(), "75.0%");
        assert_eq!(team(18, 6).record(), "18-6");
    }

    #[test]
    fn primary_colour_parses_hex() {
        assert_eq!(team(0, 0).primary_rgb(), Some((0xFF, 0x6B, 0x00)));
        assert_eq!(parse_hex_color("FF6B00"), None);
        assert_eq!(parse_hex_color("#FF6B0"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }

    #[test]
    fn match_status_parses_wire_form() {
        assert_eq!(MatchStatus::parse("finished"), Some(MatchStatus::Finished));
        assert_eq!(MatchStatus::parse("live"), Some(MatchStatus::Live));
        assert_eq!(MatchStatus::parse("Finished"), None);
        assert_eq!(MatchStatus::Scheduled.as_str(), "scheduled");
    }

    #[test]
    fn match_serializes_camel_case_with_short_kickoff() {
        let m = Match {
            id: "m".into(),
            home_team_id: "a".into(),
            away_team_id: "b".into(),
            home_score: Some(98),
            away_score: Some(92),
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            venue: "Arena".into(),
            status: MatchStatus::Finished,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["homeTeamId"], "a");
        assert_eq!(json["time"], "19:00");
        assert_eq!(json["date"], "2025-10-01");
        assert_eq!(json["status"], "finished");
        assert_eq!(m.winner_id(), Some("a"));
        assert_eq!(m.score_for("b"), Some(92));
        assert_eq!(m.score_for("c"), None);
    }
}
